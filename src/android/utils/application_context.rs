use crate::core::config::CONFIG_FILE;
use crate::core::logging::DisplayExpectation;
use jni::{
    objects::{JObject, JString},
    JNIEnv,
};
use std::path::PathBuf;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct ApplicationContext {
    pub data_dir: PathBuf,
}

impl ApplicationContext {
    /// Resolves the activity's directories and stores them for [`get_application_context`].
    pub fn build(env: &mut JNIEnv, activity: &JObject) -> jni::errors::Result<()> {
        let data_dir = Self::get_path(env, activity, "getFilesDir")?;

        let mut context = APPLICATION_CONTEXT
            .write()
            .display_expect("Failed to write application context");
        *context = Some(ApplicationContext { data_dir });
        Ok(())
    }

    fn get_path(env: &mut JNIEnv, activity: &JObject, method: &str) -> jni::errors::Result<PathBuf> {
        let path_obj = env
            .call_method(activity, method, "()Ljava/io/File;", &[])?
            .l()?;
        let path_str = env
            .call_method(path_obj, "getAbsolutePath", "()Ljava/lang/String;", &[])?
            .l()?;
        let path: String = env.get_string(&JString::from(path_str))?.into();
        Ok(PathBuf::from(path))
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }
}

static APPLICATION_CONTEXT: RwLock<Option<ApplicationContext>> = RwLock::new(None);

pub fn get_application_context() -> Option<ApplicationContext> {
    APPLICATION_CONTEXT
        .read()
        .display_expect("Failed to read application context")
        .clone()
}

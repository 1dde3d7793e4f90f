pub mod android {
    pub mod bridge;
    pub mod host;
    pub mod utils {
        pub mod application_context;
        pub mod logging;
    }
}
pub mod core {
    pub mod config;
    pub mod flags;
    pub mod logging;
}
pub mod display {
    pub mod controller;
    pub mod host;
    pub mod strategy;
}

pub use display::controller::{ImmersiveDisplayController, LifecycleObserver};

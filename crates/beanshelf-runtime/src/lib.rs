pub mod browser;
pub mod config;
pub mod effects;
pub mod error;
pub mod liveness;
pub mod navigation;
pub mod router;
pub mod views;

pub use browser::{Browser, Screen};
pub use config::{Config, EndpointConfig, resolve_workspace_path};
pub use effects::{Effect, Outcome, perform};
pub use error::{Error, Result};
pub use liveness::{Liveness, Mount, Tagged};
pub use router::{Navigation, Route, Router};
pub use views::{
    DetailState, DetailView, GalleryView, ListView, LoadState, SortDirection, SortKey,
};

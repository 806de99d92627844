pub mod catalogue;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod handler;
pub mod logger;
pub mod projector;
pub mod read;
pub mod renderer;
pub mod response;
pub mod snapshot;
pub mod snapshot_proto;
pub mod solver;
pub mod svg;

pub use tracing;

pub use catalogue::{Catalogue, RouteKind, RouteStats};
pub use config::{RenderSettings, RoutingSettings, SerializationSettings};
pub use handler::{RequestHandler, StatRequest};
pub use renderer::MapRenderer;
pub use response::{Journey, JourneyItem};
pub use solver::Solver;

pub mod chain;
pub mod convention;
pub mod engine;
pub mod miter;
pub mod normals;
pub mod offset;
pub mod request;
pub mod section;
pub mod segment;
pub mod vertical;

pub use convention::TangentConvention;
pub use engine::CreateFlushWalls;
pub use request::{
    FlushWallsRequest, FlushWallsResponse, NewExteriorMode, PlaneRef, SideMode,
};
pub use section::WallSection;
pub use segment::Segment;

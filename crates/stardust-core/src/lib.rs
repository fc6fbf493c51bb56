pub mod animation;
pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod demos;
pub mod error;
pub mod lighting;
pub mod params;
pub mod point_cloud;
pub mod random;
pub mod scene;
pub mod shapes;
pub mod shooting_star;

pub use camera::*;
pub use clock::*;
pub use color::*;
pub use constants::*;
pub use demos::{build_demo, DemoKind};
pub use error::*;
pub use params::*;
pub use point_cloud::*;
pub use random::*;
pub use scene::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

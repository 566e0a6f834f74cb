//! sg-core: procedural stage layout
//!
//! Scatters rectangular rooms in a disc, pushes them apart until they stop
//! overlapping, picks the large ones as major rooms and links those with a
//! planar edge graph. The output is plain data for a renderer or a later
//! corridor pass to consume.
//!
//! ```no_run
//! use sg_core::stage::{generate_stage_with_seed, GenerationParams};
//!
//! let stage = generate_stage_with_seed(&GenerationParams::showcase(), 42)?;
//! for edge in &stage.edges {
//!     println!("{} - {}", edge.a, edge.b);
//! }
//! # Ok::<(), sg_core::GenError>(())
//! ```

pub mod geometry;
pub mod stage;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use error::{GenError, GenResult};
pub use rng::GenRng;

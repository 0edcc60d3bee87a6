#![doc = include_str!("../README.md")]
#![deny(rust_2018_idioms, unsafe_code)]

mod block;
mod error;
mod filter;
mod render;
mod scan;

pub use block::{Block, BlockKind};
pub use error::{Error, Result};
pub use filter::filter_blocks;
pub use render::render_blocks;
pub use scan::scan_blocks;

/// Filter `schema` down to the generator named `generator_name`.
///
/// All datasources, models, enums, comments and unrecognized lines are kept;
/// every other generator block is dropped. Fails if the schema's braces do
/// not balance or if no generator with that name exists.
pub fn filter_by_generator(schema: &str, generator_name: &str) -> Result<String> {
    let blocks = scan_blocks(schema)?;
    let retained = filter_blocks(blocks, generator_name)?;

    Ok(render_blocks(&retained))
}

/// The names of all generator blocks in `schema`, in declaration order.
pub fn generator_names(schema: &str) -> Result<Vec<String>> {
    let blocks = scan_blocks(schema)?;

    Ok(blocks
        .into_iter()
        .filter(|block| block.kind == BlockKind::Generator)
        .map(|block| block.name)
        .collect())
}

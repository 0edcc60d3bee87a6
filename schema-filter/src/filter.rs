use crate::{Block, BlockKind, Error};
use tracing::debug;

/// Retain every schema-global block and only the generator named
/// `generator_name`, preserving the original order.
///
/// Datasources, models and enums are shared by every generator in a schema,
/// so they always survive; only competing generator blocks are dropped.
/// Block contents are never rewritten.
pub fn filter_blocks(blocks: Vec<Block>, generator_name: &str) -> crate::Result<Vec<Block>> {
    let mut retained = Vec::with_capacity(blocks.len());
    let mut found_generator = false;

    for block in blocks {
        match block.kind {
            BlockKind::Generator => {
                if block.name == generator_name {
                    found_generator = true;
                    retained.push(block);
                }
            }
            BlockKind::Datasource
            | BlockKind::Model
            | BlockKind::Enum
            | BlockKind::Comment
            | BlockKind::Other => retained.push(block),
        }
    }

    if !found_generator {
        return Err(Error::GeneratorNotFound {
            name: generator_name.to_owned(),
        });
    }

    debug!("retained {} blocks for generator `{generator_name}`", retained.len());

    Ok(retained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_blocks;
    use indoc::indoc;

    const SCHEMA: &str = indoc! {r#"
        generator a {
          provider = "x"
        }

        generator b {
          provider = "y"
        }

        // shared content

        model User {
          id Int @id
        }
    "#};

    #[test]
    fn keeps_exactly_the_requested_generator() {
        let blocks = scan_blocks(SCHEMA).unwrap();
        let retained = filter_blocks(blocks, "b").unwrap();

        let generators: Vec<&str> = retained
            .iter()
            .filter(|b| b.kind == BlockKind::Generator)
            .map(|b| b.name.as_str())
            .collect();

        assert_eq!(generators, &["b"]);
    }

    #[test]
    fn non_generator_blocks_survive_byte_for_byte() {
        let original = scan_blocks(SCHEMA).unwrap();
        let retained = filter_blocks(original.clone(), "a").unwrap();

        let unrelated = |blocks: &[Block]| -> Vec<Block> {
            blocks
                .iter()
                .filter(|b| b.kind != BlockKind::Generator)
                .cloned()
                .collect()
        };

        assert_eq!(unrelated(&original), unrelated(&retained));
    }

    #[test]
    fn unknown_generator_name_is_an_error() {
        let blocks = scan_blocks(SCHEMA).unwrap();
        let err = filter_blocks(blocks, "c").unwrap_err();

        assert_eq!(err.to_string(), "generator `c` not found in schema");
    }
}

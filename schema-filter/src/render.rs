use crate::{Block, BlockKind};

/// Serialize a sequence of retained blocks back into schema text.
///
/// One blank line separates consecutive blocks, except that no separator is
/// inserted before a comment or before a block whose text trims to empty.
/// Comments stay snug against the block that follows them.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(blocks.len() * 2);

    for (i, block) in blocks.iter().enumerate() {
        parts.push(&block.text);

        if let Some(next) = blocks.get(i + 1) {
            if next.kind != BlockKind::Comment && !next.text.trim().is_empty() {
                parts.push("");
            }
        }
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_blocks;
    use expect_test::expect;
    use indoc::indoc;

    #[test]
    fn blocks_are_separated_by_a_single_blank_line() {
        let schema = indoc! {r#"
            model A {
              id Int @id
            }
            model B {
              id Int @id
            }
        "#};

        let blocks = scan_blocks(schema).unwrap();
        let expected = expect![[r#"
            model A {
              id Int @id
            }

            model B {
              id Int @id
            }"#]];

        expected.assert_eq(&render_blocks(&blocks));
    }

    #[test]
    fn no_separator_is_inserted_before_a_comment() {
        let schema = indoc! {r#"
            model A {
              id Int @id
            }

            // trailing note
        "#};

        let blocks = scan_blocks(schema).unwrap();
        let expected = expect![[r#"
            model A {
              id Int @id
            }
            // trailing note"#]];

        expected.assert_eq(&render_blocks(&blocks));
    }

    #[test]
    fn empty_input_renders_to_an_empty_string() {
        assert_eq!(render_blocks(&[]), "");
    }
}

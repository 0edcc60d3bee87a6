use crate::{Block, BlockKind, Error};
use tracing::debug;

const BLOCK_KEYWORDS: &[(&str, BlockKind)] = &[
    ("generator", BlockKind::Generator),
    ("datasource", BlockKind::Datasource),
    ("model", BlockKind::Model),
    ("enum", BlockKind::Enum),
];

/// Split a schema into its ordered sequence of top-level blocks.
///
/// Blank lines are dropped; every other line belongs to exactly one block.
/// Lines that do not start any recognized block become single-line `Other`
/// blocks, so unknown constructs pass through unharmed. The only failure mode
/// is a block declaration whose braces never balance.
pub fn scan_blocks(schema: &str) -> crate::Result<Vec<Block>> {
    let lines: Vec<&str> = schema.split('\n').collect();
    let mut blocks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let trimmed = lines[i].trim();

        if trimmed.is_empty() {
            i += 1;
            continue;
        }

        if trimmed.starts_with("//") {
            blocks.push(Block::single_line(BlockKind::Comment, lines[i], i));
            i += 1;
            continue;
        }

        match block_at(&lines, i)? {
            Some(block) => {
                i = block.end_line + 1;
                blocks.push(block);
            }
            None => {
                blocks.push(Block::single_line(BlockKind::Other, lines[i], i));
                i += 1;
            }
        }
    }

    debug!("scanned {} top-level blocks", blocks.len());

    Ok(blocks)
}

/// Try to recognize a keyword block declaration starting at `start_line`.
///
/// `Ok(None)` means the line is not a block declaration (no recognized
/// keyword, or no opening brace anywhere in the remaining input) and should
/// be treated as a standalone line.
fn block_at(lines: &[&str], start_line: usize) -> crate::Result<Option<Block>> {
    let line = lines[start_line].trim();

    // The keyword must be followed by at least one whitespace character, so
    // identifiers like `enumeration` do not match.
    let Some((kind, rest)) = BLOCK_KEYWORDS.iter().find_map(|(keyword, kind)| {
        line.strip_prefix(keyword)
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map(|rest| (*kind, rest))
    }) else {
        return Ok(None);
    };

    let name = rest.split_whitespace().next().unwrap_or("").to_owned();

    // The opening brace may sit on the declaration line or on any later one.
    if !lines[start_line..].iter().any(|l| l.contains('{')) {
        return Ok(None);
    }

    // Depth is tracked over raw characters irrespective of which keyword
    // introduced a brace, so nested `{ }` pairs close correctly.
    let mut depth = 0i32;

    for (offset, current) in lines[start_line..].iter().enumerate() {
        for ch in current.chars() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let end_line = start_line + offset;
                        return Ok(Some(Block {
                            kind,
                            name,
                            text: lines[start_line..=end_line].join("\n"),
                            start_line,
                            end_line,
                        }));
                    }
                }
                _ => (),
            }
        }
    }

    Err(Error::UnbalancedBlock {
        kind,
        name,
        line: start_line + 1,
    })
}

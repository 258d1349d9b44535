use crate::entry::ServerEntry;

/// Render the detail view: one fixed-format block per entry, in insertion
/// order, blocks separated by exactly one blank line, no trailing blank
/// line.
///
/// Returns `None` for an empty registry so callers can substitute their
/// "no servers" sentinel without confusing it with a formatted listing.
#[must_use]
pub fn render_detail(entries: &[ServerEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let blocks: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| render_block(i + 1, entry))
        .collect();
    Some(blocks.join("\n\n"))
}

fn render_block(position: usize, entry: &ServerEntry) -> String {
    let mut lines = vec![
        format!("服务器序号: {position}"),
        format!("服务器名称: {}", entry.name),
        format!("服务器地址: {}:{}", entry.host, entry.port),
        format!("服务器类型: {}", entry.server_type),
    ];
    if let Some(ref description) = entry.description {
        lines.push(format!("服务器描述: {description}"));
    }
    lines.join("\n")
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, host: &str) -> ServerEntry {
        ServerEntry {
            server_type: "mc".into(),
            host: host.into(),
            port: "25565".into(),
            name: name.into(),
            description: None,
        }
    }

    #[test]
    fn empty_registry_renders_nothing() {
        assert_eq!(render_detail(&[]), None);
    }

    #[test]
    fn single_entry_block_has_fixed_field_order() {
        let listing = render_detail(&[entry("Survival", "a.com")]).unwrap();
        assert_eq!(
            listing,
            "服务器序号: 1\n服务器名称: Survival\n服务器地址: a.com:25565\n服务器类型: mc"
        );
    }

    #[test]
    fn blocks_are_separated_by_exactly_one_blank_line() {
        let listing =
            render_detail(&[entry("one", "a.com"), entry("two", "b.com")]).unwrap();
        let blocks: Vec<&str> = listing.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("服务器序号: 1"));
        assert!(blocks[1].starts_with("服务器序号: 2"));
        assert!(!listing.contains("\n\n\n"));
    }

    #[test]
    fn positions_follow_insertion_order() {
        let entries = vec![entry("c", "c.com"), entry("a", "a.com"), entry("b", "b.com")];
        let listing = render_detail(&entries).unwrap();
        for (i, block) in listing.split("\n\n").enumerate() {
            assert!(block.contains(&format!("服务器序号: {}", i + 1)));
            assert!(block.contains(&format!("服务器名称: {}", entries[i].name)));
        }
    }

    #[test]
    fn no_trailing_blank_line_or_whitespace() {
        let listing =
            render_detail(&[entry("one", "a.com"), entry("two", "b.com")]).unwrap();
        assert!(!listing.ends_with('\n'));
        assert_eq!(listing, listing.trim_end());
    }

    #[test]
    fn description_line_appears_only_when_present() {
        let mut with = entry("one", "a.com");
        with.description = Some("备用".into());
        let listing = render_detail(&[with, entry("two", "b.com")]).unwrap();
        let blocks: Vec<&str> = listing.split("\n\n").collect();
        assert!(blocks[0].ends_with("服务器描述: 备用"));
        assert!(!blocks[1].contains("服务器描述"));
    }
}

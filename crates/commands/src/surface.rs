//! The registered command surface.
//!
//! Names, aliases and help descriptions are the contract with existing
//! chat groups; the host framework registers them verbatim and routes
//! either form back through [`resolve`].

/// Registration metadata for one subcommand.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Canonical dotted name, e.g. `server.add`.
    pub name: &'static str,
    /// Chat-facing alias registered alongside the canonical name.
    pub alias: &'static str,
    /// Positional signature as shown in help; empty when none.
    pub signature: &'static str,
    /// Help description.
    pub description: &'static str,
}

/// Top-level command groups and their help descriptions.
pub const GROUPS: &[(&str, &str)] = &[
    ("server", "服务器相关指令"),
    ("mcauth", "皮肤站相关指令"),
    ("gal", "gal相关指令"),
];

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "server.list",
        alias: "服务器状态",
        signature: "",
        description: "查看群里所有服务器的状态",
    },
    CommandSpec {
        name: "server.add",
        alias: "添加服务器",
        signature: "",
        description: "添加一个服务器到群里",
    },
    CommandSpec {
        name: "server.remove",
        alias: "删除服务器",
        signature: "<服务器序号:number>",
        description: "从群里删除一个服务器",
    },
    CommandSpec {
        name: "server.detail",
        alias: "服务器信息",
        signature: "",
        description: "查看群里所有服务器详情信息",
    },
    CommandSpec {
        name: "mcauth.registry",
        alias: "注册皮肤站",
        signature: "<mc游戏内昵称>",
        description: "注册皮肤站账号",
    },
    CommandSpec {
        name: "mcauth.reset",
        alias: "重置皮肤站密码",
        signature: "",
        description: "重置皮肤站密码为随机密码",
    },
    CommandSpec {
        name: "gal.info",
        alias: "gal查询",
        signature: "<关键词|id>",
        description: "搜索galgame信息",
    },
    CommandSpec {
        name: "gal.alias",
        alias: "gal别名",
        signature: "<游戏ID> <别名>",
        description: "对gal进行别名设置",
    },
    CommandSpec {
        name: "gal.score",
        alias: "gal评分",
        signature: "<游戏ID> <评分>",
        description: "对gal进行评分",
    },
    CommandSpec {
        name: "gal.scoreInfo",
        alias: "gal评分说明",
        signature: "",
        description: "查看gal评分说明",
    },
];

/// Resolve a typed command name or alias to its canonical name.
#[must_use]
pub fn resolve(name: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .find(|c| c.name == name || c.alias == name)
        .map(|c| c.name)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn canonical_names_resolve_to_themselves() {
        for spec in COMMANDS {
            assert_eq!(resolve(spec.name), Some(spec.name));
        }
    }

    #[test]
    fn aliases_resolve_to_canonical_names() {
        assert_eq!(resolve("服务器状态"), Some("server.list"));
        assert_eq!(resolve("删除服务器"), Some("server.remove"));
        assert_eq!(resolve("gal评分说明"), Some("gal.scoreInfo"));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(resolve("server.nuke"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn names_and_aliases_are_unique() {
        let mut seen = HashSet::new();
        for spec in COMMANDS {
            assert!(seen.insert(spec.name), "duplicate name {}", spec.name);
            assert!(seen.insert(spec.alias), "duplicate alias {}", spec.alias);
        }
    }

    #[test]
    fn every_command_belongs_to_a_registered_group() {
        for spec in COMMANDS {
            let group = spec.name.split('.').next().unwrap();
            assert!(
                GROUPS.iter().any(|(name, _)| *name == group),
                "unregistered group {group}"
            );
        }
    }
}

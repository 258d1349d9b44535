//! Command routing.
//!
//! One [`CommandService::dispatch`] call handles one invocation end to
//! end: typed argument parsing, registry load→mutate→save under the
//! channel's lock, at most one backend call, and reply formatting. A
//! missing required argument is recovered by re-rendering that
//! subcommand's help; backend and store failures propagate unrecovered.

use std::sync::Arc;

use tracing::{debug, info};

use {
    kyomiko_gateway::Backend,
    kyomiko_registry::{self as registry, ChannelLocks, RegistryStore, ServerEntry},
};

use crate::{
    error::{CommandError, Result},
    invocation::{
        AddServerArgs, AliasArgs, Identity, InfoArgs, Invocation, RegisterArgs,
        RemoveServerArgs, ScoreArgs,
    },
    session::SessionPort,
    surface,
};

/// Reply sentinels shared with existing chat groups — the exact strings
/// are part of the user-visible contract.
pub const NO_SERVERS: &str = "该群没有服务器";
pub const ADD_OK: &str = "添加成功";
pub const REMOVE_OK: &str = "删除成功";
pub const NO_SUCH_SERVER: &str = "不存在该服务器";

/// `gal.scoreInfo` reply. Static, no backend call, returned unescaped.
const SCORE_GUIDE: &str = "\n评分支持1-10的整数与半分，评分为0时清除对该游戏的评分\n\
    10分：神作级别，近乎完美\n\
    9分：佳作，强烈推荐\n\
    8分：优秀作品，值得一玩\n\
    7分：良作，有可取之处\n\
    6分：及格线，普通水准\n\
    5分：平庸，不推荐不反对\n\
    4分：略差，不太推荐\n\
    3分：较差，明显缺陷\n\
    2分：很差，不建议尝试\n\
    1分：极差，完全不推荐\n\
    建议剧情占比40%，角色塑造占比25%，画面人设20%，游戏系统15%\n\
    加权评分会基于vndb分数、群评分人数等做贝叶斯加权处理";

pub struct CommandService {
    store: Arc<dyn RegistryStore>,
    backend: Arc<dyn Backend>,
    locks: ChannelLocks,
}

impl CommandService {
    pub fn new(store: Arc<dyn RegistryStore>, backend: Arc<dyn Backend>) -> Self {
        Self {
            store,
            backend,
            locks: ChannelLocks::new(),
        }
    }

    /// Route one invocation.
    ///
    /// `Ok(Some(text))` is the inline reply for the host to deliver;
    /// `Ok(None)` means the handler already queued its output through the
    /// session.
    pub async fn dispatch(
        &self,
        identity: &Identity,
        command: &str,
        invocation: &Invocation,
        session: &dyn SessionPort,
    ) -> Result<Option<String>> {
        let Some(name) = surface::resolve(command) else {
            return Err(CommandError::UnknownCommand(command.to_string()));
        };
        debug!(
            command = name,
            user_id = %identity.user_id,
            channel_id = %identity.channel_id,
            "dispatching command"
        );

        let result = match name {
            "server.list" => self.server_list(identity, session).await.map(Some),
            "server.add" => self.server_add(identity, invocation).await.map(Some),
            "server.remove" => self.server_remove(identity, invocation, session).await,
            "server.detail" => self
                .detail_text(&identity.channel_id, session)
                .await
                .map(Some),
            "mcauth.registry" => self
                .mcauth_registry(identity, invocation, session)
                .await
                .map(Some),
            "mcauth.reset" => self.mcauth_reset(identity, session).await.map(Some),
            "gal.info" => self.gal_info(identity, invocation, session).await.map(Some),
            "gal.alias" => self
                .gal_alias(identity, invocation, session)
                .await
                .map(Some),
            "gal.score" => self
                .gal_score(identity, invocation, session)
                .await
                .map(Some),
            "gal.scoreInfo" => Ok(Some(SCORE_GUIDE.to_string())),
            _ => Err(CommandError::UnknownCommand(name.to_string())),
        };

        match result {
            Err(CommandError::MissingArgument { command }) => {
                debug!(command, "required argument missing, redirecting to help");
                let text = session.help(command).await.map_err(CommandError::Session)?;
                Ok(Some(text))
            },
            other => other,
        }
    }

    // ── server.* ────────────────────────────────────────────────────────────

    async fn server_list(
        &self,
        identity: &Identity,
        session: &dyn SessionPort,
    ) -> Result<String> {
        let entries = self.load(&identity.channel_id).await?;
        if entries.is_empty() {
            return Ok(NO_SERVERS.to_string());
        }
        let body = self.backend.server_status(&entries).await?;
        Ok(session.escape(&format!("\n{body}")))
    }

    async fn server_add(&self, identity: &Identity, invocation: &Invocation) -> Result<String> {
        let args = AddServerArgs::parse(invocation)?;
        let lock = self.locks.acquire(&identity.channel_id);
        let _guard = lock.lock().await;

        let mut entries = self.load(&identity.channel_id).await?;
        entries.push(ServerEntry {
            server_type: args.server_type.to_string(),
            host: args.ip.to_string(),
            port: args.port.to_string(),
            name: args.name.to_string(),
            description: None,
        });
        self.save(&identity.channel_id, &entries).await?;
        info!(
            channel_id = %identity.channel_id,
            name = args.name,
            count = entries.len(),
            "server added"
        );
        Ok(ADD_OK.to_string())
    }

    async fn server_remove(
        &self,
        identity: &Identity,
        invocation: &Invocation,
        session: &dyn SessionPort,
    ) -> Result<Option<String>> {
        let args = RemoveServerArgs::parse(invocation)?;
        let lock = self.locks.acquire(&identity.channel_id);
        let _guard = lock.lock().await;

        let mut entries = self.load(&identity.channel_id).await?;
        let removed = match registry::remove_at(&mut entries, args.position) {
            Ok(removed) => removed,
            Err(registry::Error::OutOfRange { .. }) => {
                return Ok(Some(NO_SUCH_SERVER.to_string()));
            },
            Err(e) => return Err(e.into()),
        };
        // Commit before the dependent detail read below.
        self.save(&identity.channel_id, &entries).await?;
        info!(
            channel_id = %identity.channel_id,
            position = args.position,
            name = %removed.name,
            "server removed"
        );

        let detail = self.detail_text(&identity.channel_id, session).await?;
        session
            .send_queued(REMOVE_OK)
            .await
            .map_err(CommandError::Session)?;
        session
            .send_queued(&detail)
            .await
            .map_err(CommandError::Session)?;
        Ok(None)
    }

    /// Fresh detail view from the store: escaped listing, or the bare
    /// no-servers sentinel.
    async fn detail_text(&self, channel_id: &str, session: &dyn SessionPort) -> Result<String> {
        let entries = self.load(channel_id).await?;
        Ok(match registry::render_detail(&entries) {
            Some(listing) => session.escape(&listing),
            None => NO_SERVERS.to_string(),
        })
    }

    // ── mcauth.* ────────────────────────────────────────────────────────────

    async fn mcauth_registry(
        &self,
        identity: &Identity,
        invocation: &Invocation,
        session: &dyn SessionPort,
    ) -> Result<String> {
        let args = RegisterArgs::parse(invocation)?;
        let body = self
            .backend
            .auth_register(&identity.user_id, args.display_name)
            .await?;
        Ok(session.escape(&body))
    }

    async fn mcauth_reset(
        &self,
        identity: &Identity,
        session: &dyn SessionPort,
    ) -> Result<String> {
        let body = self.backend.auth_reset(&identity.user_id).await?;
        Ok(session.escape(&body))
    }

    // ── gal.* ───────────────────────────────────────────────────────────────

    async fn gal_info(
        &self,
        identity: &Identity,
        invocation: &Invocation,
        session: &dyn SessionPort,
    ) -> Result<String> {
        let args = InfoArgs::parse(invocation)?;
        let body = self
            .backend
            .game_info(&identity.user_id, &identity.channel_id, args.keyword)
            .await?;
        Ok(session.escape(&body))
    }

    async fn gal_alias(
        &self,
        identity: &Identity,
        invocation: &Invocation,
        session: &dyn SessionPort,
    ) -> Result<String> {
        let args = AliasArgs::parse(invocation)?;
        let body = self
            .backend
            .set_alias(
                &identity.user_id,
                &identity.channel_id,
                args.game_id,
                args.alias,
            )
            .await?;
        Ok(session.escape(&body))
    }

    async fn gal_score(
        &self,
        identity: &Identity,
        invocation: &Invocation,
        session: &dyn SessionPort,
    ) -> Result<String> {
        let args = ScoreArgs::parse(invocation)?;
        let body = self
            .backend
            .set_score(
                &identity.user_id,
                &identity.channel_id,
                args.game_id,
                args.score,
            )
            .await?;
        Ok(session.escape(&body))
    }

    // ── store plumbing ──────────────────────────────────────────────────────

    async fn load(&self, channel_id: &str) -> Result<Vec<ServerEntry>> {
        self.store
            .load(channel_id)
            .await
            .map_err(CommandError::Store)
    }

    async fn save(&self, channel_id: &str, entries: &[ServerEntry]) -> Result<()> {
        self.store
            .save(channel_id, entries)
            .await
            .map_err(CommandError::Store)
    }
}

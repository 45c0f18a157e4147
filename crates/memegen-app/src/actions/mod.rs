//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::MemeApi;
use crate::message::Message;
use crate::UpdateAction;

pub mod download;
pub use download::Downloader;

/// Everything a background task may need
pub struct ActionContext<A> {
    pub msg_tx: mpsc::Sender<Message>,
    pub api: Arc<A>,
    pub downloader: Downloader,
}

impl<A> Clone for ActionContext<A> {
    fn clone(&self) -> Self {
        Self {
            msg_tx: self.msg_tx.clone(),
            api: Arc::clone(&self.api),
            downloader: self.downloader.clone(),
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, ctx: &ActionContext<A>)
where
    A: MemeApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::GenerateMemes { url, count } => {
            spawn_generation(ctx.clone(), url, count);
        }

        UpdateAction::DownloadMeme {
            index,
            url,
            filename,
        } => {
            spawn_download(ctx.clone(), index, url, filename);
        }
    }
}

/// Run exactly one meme campaign request and report the outcome
fn spawn_generation<A>(ctx: ActionContext<A>, url: String, count: u8)
where
    A: MemeApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let outcome = ctx.api.generate(&url, count).await;
        debug!("Meme campaign finished: {:?}", outcome);
        if ctx
            .msg_tx
            .send(Message::GenerationFinished(outcome))
            .await
            .is_err()
        {
            warn!("Generation finished after the engine shut down");
        }
    });
}

fn spawn_download<A: Send + Sync + 'static>(
    ctx: ActionContext<A>,
    index: usize,
    url: String,
    filename: String,
) {
    tokio::spawn(async move {
        let msg = match ctx.downloader.save(&url, &filename).await {
            Ok(path) => Message::DownloadFinished { index, path },
            Err(e) => Message::DownloadFailed {
                index,
                error: e.to_string(),
            },
        };
        let _ = ctx.msg_tx.send(msg).await;
    });
}

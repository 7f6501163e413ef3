use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use serenity::{
    all::{ChannelId, GuildId, MessageId},
    async_trait,
};

use crate::{
    error::{resolve::ResolveError, AppError},
    model::{player::StatusMessage, track::Track},
    service::{
        player::{
            board::StatusBoard, display::StatusView, transport::VoiceTransport, PlayerService,
            PlayerWorker,
        },
        resolver::MediaResolver,
    },
};

mod query;
mod session;

const GUILD: GuildId = GuildId::new(1);
const VOICE: ChannelId = ChannelId::new(10);
const OTHER_VOICE: ChannelId = ChannelId::new(11);
const TEXT: ChannelId = ChannelId::new(20);

fn track(title: &str) -> Track {
    Track {
        title: title.to_string(),
        url: format!("https://media.example/{}.webm", title),
        thumbnail: Some(format!("https://media.example/{}.jpg", title)),
        duration: Some(180),
        uploader: "Uploader".to_string(),
        description: String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TransportCall {
    Connect(ChannelId),
    Play { title: String, play_id: u64 },
    Pause,
    Resume,
    Disconnect,
}

/// Voice transport recording every call instead of touching Discord.
#[derive(Clone, Default)]
struct FakeTransport {
    calls: Arc<Mutex<Vec<TransportCall>>>,
    fail_connect: bool,
    fail_play: Arc<AtomicBool>,
}

impl FakeTransport {
    fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Makes every following `play` fail.
    fn break_playback(&self) {
        self.fail_play.store(true, Ordering::SeqCst);
    }

    fn record(&self, call: TransportCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl VoiceTransport for FakeTransport {
    async fn connect(&self, _guild_id: GuildId, channel_id: ChannelId) -> Result<(), AppError> {
        self.record(TransportCall::Connect(channel_id));

        if self.fail_connect {
            return Err(AppError::InternalError("connection refused".to_string()));
        }
        Ok(())
    }

    async fn play(&self, _guild_id: GuildId, track: &Track, play_id: u64) -> Result<(), AppError> {
        self.record(TransportCall::Play {
            title: track.title.clone(),
            play_id,
        });

        if self.fail_play.load(Ordering::SeqCst) {
            return Err(AppError::NotFound("No voice connection".to_string()));
        }
        Ok(())
    }

    async fn pause(&self, _guild_id: GuildId) -> Result<(), AppError> {
        self.record(TransportCall::Pause);
        Ok(())
    }

    async fn resume(&self, _guild_id: GuildId) -> Result<(), AppError> {
        self.record(TransportCall::Resume);
        Ok(())
    }

    async fn disconnect(&self, _guild_id: GuildId) -> Result<(), AppError> {
        self.record(TransportCall::Disconnect);
        Ok(())
    }
}

#[derive(Default)]
struct BoardState {
    published: Vec<StatusView>,
    updates: Vec<StatusView>,
    removed: Vec<StatusMessage>,
    /// Simulates the panel having been deleted by someone else.
    gone: bool,
    fail_publish: bool,
}

/// Status board keeping rendered panels in memory.
#[derive(Clone, Default)]
struct FakeBoard {
    state: Arc<Mutex<BoardState>>,
}

impl FakeBoard {
    fn published(&self) -> Vec<StatusView> {
        self.state.lock().unwrap().published.clone()
    }

    fn last_update(&self) -> Option<StatusView> {
        self.state.lock().unwrap().updates.last().cloned()
    }

    fn removed(&self) -> Vec<StatusMessage> {
        self.state.lock().unwrap().removed.clone()
    }

    fn failing_publish() -> Self {
        let board = Self::default();
        board.state.lock().unwrap().fail_publish = true;
        board
    }

    fn delete_externally(&self) {
        self.state.lock().unwrap().gone = true;
    }
}

#[async_trait]
impl StatusBoard for FakeBoard {
    async fn publish(
        &self,
        channel_id: ChannelId,
        view: &StatusView,
    ) -> Result<StatusMessage, AppError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_publish {
            return Err(AppError::InternalError("Missing access".to_string()));
        }

        state.published.push(view.clone());
        state.gone = false;

        Ok(StatusMessage {
            channel_id,
            message_id: MessageId::new(1000 + state.published.len() as u64),
        })
    }

    async fn update(&self, message: &StatusMessage, view: &StatusView) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.gone {
            return Err(AppError::NotFound(format!(
                "Player panel {} no longer exists",
                message.message_id
            )));
        }

        state.updates.push(view.clone());
        Ok(())
    }

    async fn remove(&self, message: &StatusMessage) -> Result<(), AppError> {
        self.state.lock().unwrap().removed.push(*message);
        Ok(())
    }
}

/// Resolver answering every query with a fixed result.
enum FakeResolver {
    Found(Track),
    Empty,
    Broken,
}

#[async_trait]
impl MediaResolver for FakeResolver {
    async fn resolve(&self, query: &str) -> Result<Track, ResolveError> {
        match self {
            Self::Found(track) => Ok(track.clone()),
            Self::Empty => Err(ResolveError::NoResults(query.to_string())),
            Self::Broken => Err(serde_json::from_str::<serde_json::Value>("<html>")
                .unwrap_err()
                .into()),
        }
    }
}

type TestWorker = PlayerWorker<FakeTransport, FakeBoard>;

fn worker_with(transport: FakeTransport, board: FakeBoard) -> (TestWorker, FakeTransport, FakeBoard) {
    let (_service, inbox): (PlayerService, _) = PlayerService::channel();

    (
        PlayerWorker::new(inbox, transport.clone(), board.clone()),
        transport,
        board,
    )
}

fn worker() -> (TestWorker, FakeTransport, FakeBoard) {
    worker_with(FakeTransport::default(), FakeBoard::default())
}

/// Worker running on its own task, reachable through a service handle.
fn spawn_worker() -> (PlayerService, FakeTransport, FakeBoard) {
    let (service, inbox) = PlayerService::channel();
    let transport = FakeTransport::default();
    let board = FakeBoard::default();

    tokio::spawn(PlayerWorker::new(inbox, transport.clone(), board.clone()).run());

    (service, transport, board)
}

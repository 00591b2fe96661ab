use callgrid::application::{CallGridService, GridEvent};
use callgrid::config::Config;
use callgrid::domain::call::{
    ActiveSpeakerState, CallParticipantState, MicrophoneState, Participant, StreamId, VideoState,
};
use callgrid::domain::grid::Size;
use callgrid::domain::shared::value_objects::{ClientId, UserId};
use callgrid::infrastructure::InMemoryRoster;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Page bounds used when printing cell sizes
const DEMO_PAGE_BOUNDS: Size = Size {
    width: 390.0,
    height: 844.0,
};

/// Roster file accepted on the command line
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(rename = "self")]
    self_stream: Option<StreamId>,
    participants: Vec<Participant>,
}

#[derive(Debug, Serialize)]
struct Plan<'a> {
    snapshot: &'a callgrid::application::CallGridSnapshot,
    page_cells: Vec<Vec<Size>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os("CALLGRID_CONFIG").map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    let mut args = std::env::args().skip(1);
    let first = args.next();
    if first.as_deref() == Some("--print-config") {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting CallGrid");

    let roster_file = match first {
        Some(path) => {
            info!("Loading roster from {}", path);
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        }
        None => sample_roster(),
    };

    let roster = Arc::new(InMemoryRoster::with_participants(roster_file.participants));
    let service = CallGridService::new(roster, &config)?;

    let mut events = service.subscribe();
    let listener = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                GridEvent::ArrangementUpdated { tiles, pages, .. } => {
                    info!(tiles, pages, "Arrangement updated")
                }
                other => info!(?other, "Grid event"),
            }
        }
    });

    let snapshot = service.refresh(
        config.selection.presentation_mode,
        roster_file.self_stream.as_ref(),
    );

    let tiles = snapshot.arrangement.grid.len();
    let page_cells = (0..snapshot.pages)
        .map(|page| service.planner().page_frames(tiles, page, DEMO_PAGE_BOUNDS))
        .collect::<callgrid::Result<Vec<_>>>()?;

    println!(
        "{}",
        serde_json::to_string_pretty(&Plan {
            snapshot: &snapshot,
            page_cells,
        })?
    );

    drop(service);
    listener.await?;

    info!("CallGrid finished");
    Ok(())
}

/// A small group call: the local user plus four remotes, one without video
fn sample_roster() -> RosterFile {
    let participant = |name: &str, video| {
        let state = CallParticipantState::Connected {
            video,
            microphone: MicrophoneState::Unmuted,
        };
        Participant::new(UserId::new(), ClientId::random(), name, state)
    };

    let me = participant("Me", VideoState::Started);
    let self_stream = Some(me.stream_id());

    RosterFile {
        self_stream,
        participants: vec![
            me,
            participant("bob", VideoState::Started)
                .with_active_speaker_state(ActiveSpeakerState::Active),
            participant("Alice", VideoState::Started),
            participant("Cate", VideoState::Stopped),
            participant("Dan", VideoState::Started),
        ],
    }
}

use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Editors often write a file as several events; collapse bursts.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Watches the clock's config file and notifies on every change.
///
/// The parent directory is watched rather than the file itself, so the
/// watcher survives atomic-rename saves and picks up a config file that is
/// created after the clock started.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use fillclock_config::ConfigWatcher;
/// let (_, mut rx) = ConfigWatcher::spawn("/home/user/.config/fillclock/fillclock.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed — reloading");
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("Cannot create config directory '{}': {e}", dir.display());
    }

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) => {
                let relevant = matches!(e.kind, EventKind::Modify(_) | EventKind::Create(_))
                    && e.paths.iter().any(|p| p.file_name() == path.file_name());
                if !relevant {
                    continue;
                }

                // Swallow the rest of the burst before notifying.
                tokio::time::sleep(DEBOUNCE).await;
                while sync_rx.try_recv().is_ok() {}

                debug!("Config change detected");
                if tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

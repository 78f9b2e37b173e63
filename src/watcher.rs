//! Content file watching for live reload.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Set up a file watcher that flags the shared reload bit whenever the
/// content document changes.
///
/// Watches the parent directory rather than the file itself because many
/// editors replace the file on save; events are matched by filename.
/// Returns None if the watcher cannot be created; the app simply runs
/// without live reload in that case.
pub fn setup_content_watcher(
    content_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));
    let file_name = content_path.file_name().map(|n| n.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            let Ok(event) = res else { return };
            let matches = event.paths.iter().any(|p| {
                match (&file_name, p.file_name()) {
                    (Some(expected), Some(actual)) => expected.as_os_str() == actual,
                    _ => false,
                }
            });
            if matches {
                if let Ok(mut flag) = needs_reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            let parent = content_path.parent()?;
            watcher.watch(parent, RecursiveMode::NonRecursive).ok()?;
            Some(watcher)
        }
        Err(_) => None,
    }
}

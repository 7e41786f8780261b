use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use autoreload::errors::{AutoreloadError, Result};
use autoreload::relay::ReloadBackend;

/// A fake backend that:
/// - records every path it was asked to relay
/// - optionally fails every request
/// - optionally takes some time per request, to simulate a slow server.
#[derive(Clone, Default)]
pub struct FakeBackend {
    relayed: Arc<Mutex<Vec<PathBuf>>>,
    fail: bool,
    delay: Option<Duration>,
}

impl FakeBackend {
    pub fn new(relayed: Arc<Mutex<Vec<PathBuf>>>) -> Self {
        Self {
            relayed,
            fail: false,
            delay: None,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl ReloadBackend for FakeBackend {
    fn request_reload(
        &mut self,
        path: PathBuf,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let relayed = Arc::clone(&self.relayed);
        let fail = self.fail;
        let delay = self.delay;

        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            relayed.lock().unwrap().push(path);
            if fail {
                return Err(AutoreloadError::Other(anyhow::anyhow!(
                    "fake backend configured to fail"
                )));
            }
            Ok(())
        })
    }
}

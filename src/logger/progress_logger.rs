use std::io::Write;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner on stderr that shows "label done/total" while a bulk submission runs.
pub struct ProgressLogger {
    label: String,
    progress_sender: Option<watch::Sender<(usize, usize)>>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl ProgressLogger {
    pub fn new(label: String) -> Self {
        Self {
            label,
            progress_sender: None,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self, total: usize) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let (progress_tx, progress_rx) = watch::channel((0, total));
        let label = self.label.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(150));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let (done, total) = *progress_rx.borrow();
                        let mut stderr = std::io::stderr();
                        let _ = write!(stderr, "\r{} {}/{} {} ", label, done, total, FRAMES[frame]);
                        let _ = stderr.flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.progress_sender = Some(progress_tx);
        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub fn update(&self, done: usize, total: usize) {
        if let Some(sender) = &self.progress_sender {
            let _ = sender.send((done, total));
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        Self::finish_line("✅ ", final_message);
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        Self::finish_line("❌", error_message);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        self.progress_sender = None;
    }

    fn finish_line(symbol: &str, message: &str) {
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "\r\x1b[K{} {}", symbol, message);
        let _ = stderr.flush();
    }
}

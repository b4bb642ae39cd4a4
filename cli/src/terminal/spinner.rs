use std::io::Write;
use std::sync::LazyLock;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use colored::*;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

const TIP_DURATION: Duration = Duration::from_secs(3);
const MESSAGE_READ_TIME: Duration = Duration::from_secs(2);
const MIN_TIP_VISIBILITY: Duration = Duration::from_millis(750);

pub const CHECK_TIPS: &[&str] = &[
    "The model is reading your YAML, this can take a few seconds",
    "Type 'reset' to abandon this check and restore the template",
    "Indentation matters: Netplan uses spaces, never tabs",
];

pub const EXPLAIN_TIPS: &[&str] = &["Type 'close' to dismiss the explanation panel"];

/// Every live spinner is drawn through this, so several can run at once.
static SPINNERS: LazyLock<MultiProgress> = LazyLock::new(MultiProgress::new);

pub struct SpinnerHandle {
    spinner: ProgressBar,
    tx: Sender<String>,
}

impl SpinnerHandle {
    pub fn send_to_queue(&self, message: String) {
        let _ = self.tx.send(message);
    }

    /// Clears the spinner line. Dropping the handle does the same.
    pub fn finish_and_clear(self) {}
}

impl Drop for SpinnerHandle {
    fn drop(&mut self) {
        self.spinner.finish_and_clear();
        SPINNERS.remove(&self.spinner);
    }
}

/// Starts a spinner showing `message`, cycling through `tips` while idle.
///
/// Log output written while the spinner runs is printed above it.
pub fn start(message: &str, tips: &'static [&'static str]) -> SpinnerHandle {
    let pb = SPINNERS.add(ProgressBar::new_spinner());
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let (tx, rx) = mpsc::channel::<String>();
    let pb_clone = pb.clone();

    thread::spawn(move || {
        let mut tip_index = 0;
        let mut next_action_time = Instant::now() + MESSAGE_READ_TIME;
        let mut is_showing_tip = false;
        let mut last_tip_time = Instant::now();

        loop {
            if pb_clone.is_finished() {
                break;
            }

            let wait_time = next_action_time.saturating_duration_since(Instant::now());

            match rx.recv_timeout(wait_time) {
                Ok(mut msg) => {
                    if is_showing_tip {
                        let elapsed = last_tip_time.elapsed();
                        if elapsed < MIN_TIP_VISIBILITY {
                            thread::sleep(MIN_TIP_VISIBILITY - elapsed);
                        }
                        is_showing_tip = false;
                    }
                    while let Ok(newer_msg) = rx.try_recv() {
                        msg = newer_msg;
                    }
                    pb_clone.set_message(msg);
                    next_action_time = Instant::now() + MESSAGE_READ_TIME;
                }
                Err(RecvTimeoutError::Timeout) => {
                    if tips.is_empty() {
                        next_action_time = Instant::now() + TIP_DURATION;
                        continue;
                    }
                    let tip = tips[tip_index % tips.len()];
                    pb_clone.set_message(format!("{}", tip.italic().white()));

                    tip_index += 1;
                    is_showing_tip = true;
                    last_tip_time = Instant::now();

                    next_action_time = Instant::now() + TIP_DURATION;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    break;
                }
            }
        }
    });

    SpinnerHandle { spinner: pb, tx }
}

/// Routes log lines around the live spinners so they do not tear their lines.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        SPINNERS.suspend(|| std::io::stdout().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}

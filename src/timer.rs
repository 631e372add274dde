use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { generation: u64 },
}

#[derive(Debug)]
struct Countdown {
    generation: u64,
    cancel: Arc<AtomicBool>,
}

/// Owns the single live per-question countdown.
///
/// Every `start` invalidates the previous countdown, so at most one
/// generation is ever accepted.
#[derive(Debug)]
pub struct QuestionTimer {
    tx: mpsc::Sender<TimerEvent>,
    interval: Duration,
    active: Option<Countdown>,
    next_generation: u64,
}

impl QuestionTimer {
    pub fn new(tx: mpsc::Sender<TimerEvent>, interval: Duration) -> Self {
        Self {
            tx,
            interval,
            active: None,
            next_generation: 0,
        }
    }

    pub fn start(&mut self) -> u64 {
        self.cancel();

        self.next_generation += 1;
        let generation = self.next_generation;
        let cancel = Arc::new(AtomicBool::new(false));

        let tx = self.tx.clone();
        let flag = cancel.clone();
        let interval = self.interval;
        thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::SeqCst) {
                break;
            }
            if tx.send(TimerEvent::Tick { generation }).is_err() {
                break;
            }
        });

        self.active = Some(Countdown { generation, cancel });
        generation
    }

    pub fn cancel(&mut self) {
        if let Some(countdown) = self.active.take() {
            countdown.cancel.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Whether a tick belongs to the live countdown. Ticks already in flight
    /// from a cancelled countdown are rejected here.
    pub fn accepts(&self, generation: u64) -> bool {
        self.active
            .as_ref()
            .map_or(false, |c| c.generation == generation)
    }
}

impl Drop for QuestionTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn format_seconds(secs: u32) -> String {
    format!("{}s", secs)
}

pub fn format_elapsed(total_secs: i64) -> String {
    if total_secs <= 0 {
        return "0s".to_string();
    }
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

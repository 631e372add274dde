use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use termtrivia::timer::{format_elapsed, format_seconds, QuestionTimer, TimerEvent};

const FAST: Duration = Duration::from_millis(10);

fn drain(rx: &mpsc::Receiver<TimerEvent>) {
    while rx.try_recv().is_ok() {}
}

#[test]
fn test_ticks_carry_live_generation() {
    let (tx, rx) = mpsc::channel();
    let mut timer = QuestionTimer::new(tx, FAST);
    assert!(!timer.is_running());

    let generation = timer.start();
    assert!(timer.is_running());

    let TimerEvent::Tick { generation: got } = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(got, generation);
    assert!(timer.accepts(got));
}

#[test]
fn test_restart_rejects_stale_generation() {
    let (tx, rx) = mpsc::channel();
    let mut timer = QuestionTimer::new(tx, FAST);

    let first = timer.start();
    let second = timer.start();
    assert_ne!(first, second);
    assert!(!timer.accepts(first));
    assert!(timer.accepts(second));

    // Only the second countdown keeps ticking
    thread::sleep(Duration::from_millis(50));
    drain(&rx);
    for _ in 0..3 {
        let TimerEvent::Tick { generation } = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(generation, second);
    }
}

#[test]
fn test_cancel_stops_ticks() {
    let (tx, rx) = mpsc::channel();
    let mut timer = QuestionTimer::new(tx, FAST);

    let generation = timer.start();
    rx.recv_timeout(Duration::from_secs(2)).unwrap();
    timer.cancel();
    assert!(!timer.is_running());
    assert!(!timer.accepts(generation));

    thread::sleep(Duration::from_millis(50));
    drain(&rx);
    assert!(rx.recv_timeout(Duration::from_millis(60)).is_err());
}

#[test]
fn test_drop_stops_ticks() {
    let (tx, rx) = mpsc::channel();
    let mut timer = QuestionTimer::new(tx, FAST);
    timer.start();
    rx.recv_timeout(Duration::from_secs(2)).unwrap();
    drop(timer);

    thread::sleep(Duration::from_millis(50));
    drain(&rx);
    assert!(rx.recv_timeout(Duration::from_millis(60)).is_err());
}

#[test]
fn test_format_seconds() {
    assert_eq!(format_seconds(20), "20s");
    assert_eq!(format_seconds(0), "0s");
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(-3), "0s");
    assert_eq!(format_elapsed(0), "0s");
    assert_eq!(format_elapsed(7), "7s");
    assert_eq!(format_elapsed(125), "2m 05s");
    assert_eq!(format_elapsed(3723), "1h 02m 03s");
}

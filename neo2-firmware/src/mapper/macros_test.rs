extern crate std;

use std::vec::Vec;

use neo2_common::keycodes::kc;

use super::*;

fn keys_only(steps: &[MacroStep]) -> Vec<MacroEvent> {
    MacroPlayer::new(steps)
        .filter(|e| !matches!(e, MacroEvent::Delay(_)))
        .collect()
}

#[test]
fn tap_is_press_then_release() {
    let ans: Vec<_> = MacroPlayer::new(&[MacroStep::Tap(kc::A)]).collect();
    assert_eq!(ans, [MacroEvent::Press(kc::A), MacroEvent::Release(kc::A)]);
}

#[test]
fn interval_follows_every_step() {
    let ans: Vec<_> = MacroPlayer::new(&[
        MacroStep::Interval(15),
        MacroStep::Down(kc::LSFT),
        MacroStep::Tap(kc::NUBS),
        MacroStep::Up(kc::LSFT),
    ])
    .collect();

    assert_eq!(
        ans,
        [
            MacroEvent::Delay(15),
            MacroEvent::Press(kc::LSFT),
            MacroEvent::Delay(15),
            MacroEvent::Press(kc::NUBS),
            MacroEvent::Delay(15),
            MacroEvent::Release(kc::NUBS),
            MacroEvent::Delay(15),
            MacroEvent::Release(kc::LSFT),
            MacroEvent::Delay(15),
        ]
    );
}

#[test]
fn wait_adds_its_own_delay() {
    let ans: Vec<_> = MacroPlayer::new(&[
        MacroStep::Interval(5),
        MacroStep::Wait(100),
        MacroStep::Interval(0),
        MacroStep::Wait(0),
        MacroStep::Tap(kc::B),
    ])
    .collect();

    assert_eq!(
        ans,
        [
            MacroEvent::Delay(5),
            MacroEvent::Delay(100),
            MacroEvent::Delay(5),
            MacroEvent::Press(kc::B),
            MacroEvent::Release(kc::B),
        ]
    );
}

#[test]
fn deterministic() {
    let steps = [
        MacroStep::Interval(15),
        MacroStep::Tap(kc::GRV),
        MacroStep::Tap(kc::SPC),
    ];
    let first: Vec<_> = MacroPlayer::new(&steps).collect();
    let second: Vec<_> = MacroPlayer::new(&steps).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 9);
}

#[test]
fn empty_macro() {
    assert_eq!(MacroPlayer::new(&[]).next(), None);
    assert!(keys_only(&[MacroStep::Interval(3)]).is_empty());
}

/*
 *  tests/bridge_integration.rs
 *
 *  Integration tests for the bridge and its display cache
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 */

use std::ffi::c_void;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use calcbridge::console::map_char;
use calcbridge::display::{narrow_to_ascii, CachingDisplay};
use calcbridge::resources::{FixedResources, ResourceProvider};
use calcbridge::{CalcBridge, CalcDisplay, CalculatorMode, Command};

extern "C" fn count_calls(context: *mut c_void) {
    let counter = unsafe { &*(context as *const AtomicUsize) };
    counter.fetch_add(1, Ordering::SeqCst);
}

fn context(counter: &AtomicUsize) -> *mut c_void {
    counter as *const AtomicUsize as *mut c_void
}

/// Feed a key string one character at a time, as a host keyboard would
fn type_keys(bridge: &mut CalcBridge, keys: &str) {
    for command in keys.chars().filter_map(map_char) {
        bridge.send_command(command.code());
    }
}

#[test]
fn test_create_then_display_is_zero() {
    let counter = AtomicUsize::new(0);
    let mut bridge = CalcBridge::new();
    bridge.register_update_callback(Some(count_calls), context(&counter));

    assert_eq!(bridge.display(), "0");
    assert_eq!(bridge.display_boundary().to_bytes(), b"0");
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_digit_sequence_tracks_engine_display() {
    let mut bridge = CalcBridge::new();
    let mut expected = String::new();
    for digit in "9081726354".chars() {
        type_keys(&mut bridge, &digit.to_string());
        expected.push(digit);
        assert_eq!(bridge.display(), expected);
        assert_eq!(bridge.display_boundary().to_bytes(), narrow_to_ascii(bridge.display()).as_slice());
    }
}

#[test]
fn test_twelve_plus_seven_one_char_at_a_time() {
    let mut bridge = CalcBridge::new();
    type_keys(&mut bridge, "12+7=");
    assert_eq!(bridge.display(), "19");
    assert_eq!(bridge.display_boundary().to_bytes(), b"19");
}

#[test]
fn test_clear_after_any_sequence() {
    for keys in ["", "5", "12+7=", "3*", "1/0=", "9.75-", "123456789012345678"] {
        let mut bridge = CalcBridge::new();
        type_keys(&mut bridge, keys);
        type_keys(&mut bridge, "C");
        assert_eq!(bridge.display(), "0", "after {keys:?}");
        assert!(!bridge.is_error(), "after {keys:?}");
    }
}

#[test]
fn test_null_callback_is_silent() {
    let mut bridge = CalcBridge::new();
    bridge.register_update_callback(None, std::ptr::null_mut());
    type_keys(&mut bridge, "42");
    assert_eq!(bridge.display(), "42");
}

#[test]
fn test_only_latest_callback_fires() {
    let first = AtomicUsize::new(0);
    let second = AtomicUsize::new(0);
    let mut bridge = CalcBridge::new();

    bridge.register_update_callback(Some(count_calls), context(&first));
    type_keys(&mut bridge, "1");
    bridge.register_update_callback(Some(count_calls), context(&second));
    type_keys(&mut bridge, "23");

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 2);
}

#[test]
fn test_set_mode_alone_leaves_cache() {
    let counter = AtomicUsize::new(0);
    let mut bridge = CalcBridge::new();
    type_keys(&mut bridge, "7*6=");
    bridge.register_update_callback(Some(count_calls), context(&counter));

    for mode in [CalculatorMode::Scientific, CalculatorMode::Programmer, CalculatorMode::Standard] {
        bridge.set_mode(mode);
        assert_eq!(bridge.display(), "42");
        assert_eq!(bridge.display_boundary().to_bytes(), b"42");
    }
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_mode_applies_to_later_commands() {
    let mut bridge = CalcBridge::new();
    bridge.send_command(Command::Digit2.code());
    bridge.send_command(Command::Power.code());
    // power is scientific only; standard ignores it
    assert!(bridge.history().is_empty());

    bridge.set_scientific_mode();
    for command in [Command::Power, Command::Digit1, Command::Digit0, Command::Equals] {
        bridge.send_command(command.code());
    }
    assert_eq!(bridge.display(), "1024");
}

#[test]
fn test_unknown_codes_ignored() {
    let counter = AtomicUsize::new(0);
    let mut bridge = CalcBridge::new();
    bridge.register_update_callback(Some(count_calls), context(&counter));

    for code in [-1, 0, 85, 96, 200, i32::MAX] {
        bridge.send_command(code);
    }
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(bridge.display(), "0");
}

#[test]
fn test_boundary_narrowing_of_wide_text() {
    let mut sink = CachingDisplay::new();
    sink.set_primary_display("1\u{202f}234,5\u{20ac}", false);

    assert_eq!(sink.display(), "1\u{202f}234,5\u{20ac}");
    assert_eq!(sink.display_boundary().to_bytes(), b"1?234,5?");
}

#[test]
fn test_resource_strings() {
    assert_eq!(FixedResources.engine_string("sDecimal"), ".");
    assert_eq!(FixedResources.engine_string("sThousand"), ",");
    assert_eq!(FixedResources.engine_string("sGrouping"), "3;0");
    assert_eq!(FixedResources.engine_string("sNegative"), "");
}

#[test]
fn test_bridges_on_separate_threads() {
    let workers: Vec<_> = [("12+7=", "19"), ("6*7=", "42"), ("9-10=", "-1")]
        .into_iter()
        .map(|(keys, expected)| {
            thread::spawn(move || {
                let mut bridge = CalcBridge::new();
                type_keys(&mut bridge, keys);
                (bridge.display().to_string(), expected)
            })
        })
        .collect();

    for worker in workers {
        let (shown, expected) = worker.join().unwrap();
        assert_eq!(shown, expected);
    }
}

#[test]
fn test_bridge_moves_between_threads() {
    let mut bridge = CalcBridge::new();
    type_keys(&mut bridge, "8+");
    let bridge = thread::spawn(move || {
        let mut bridge = bridge;
        type_keys(&mut bridge, "5=");
        bridge
    })
    .join()
    .unwrap();
    assert_eq!(bridge.display(), "13");
}

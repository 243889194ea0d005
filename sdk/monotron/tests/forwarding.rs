mod common;

use core::ffi::{c_char, c_void};
use core::fmt::Write;
use std::mem::{offset_of, size_of};

use common::{Call, Recorder};
use monotron::audio::{Channel, Waveform};
use monotron::font::{CustomFont, FontMode};
use monotron::rand::Rand;
use monotron::{Callbacks, Console, EOF, Firmware};

static FONT: CustomFont = CustomFont::blank();

/// Run `f` against a console talking to `host` directly.
fn direct(mut host: Recorder, f: &dyn Fn(&mut Console<'_>) -> i32) -> (i32, Recorder) {
    let result = {
        let mut console = Console::new(&mut host);
        f(&mut console)
    };
    (result, host)
}

/// Run `f` against a console talking to `host` through a C-ABI callback table.
fn via_table(mut host: Recorder, f: &dyn Fn(&mut Console<'_>) -> i32) -> (i32, Recorder) {
    let result = {
        let table = Callbacks::from_host(&mut host);
        let mut firmware = unsafe { Firmware::new(&table) };
        let mut console = Console::new(&mut firmware);
        f(&mut console)
    };
    (result, host)
}

/// Both paths must agree on the result and on what the host saw.
fn forward(make: impl Fn() -> Recorder, f: impl Fn(&mut Console<'_>) -> i32) -> (i32, Vec<Call>) {
    let (direct_result, direct_host) = direct(make(), &f);
    let (table_result, table_host) = via_table(make(), &f);
    assert_eq!(direct_result, table_result);
    assert_eq!(direct_host.calls, table_host.calls);
    (table_result, table_host.calls)
}

#[test]
fn putchar_returns_host_status() {
    let (ok, calls) = forward(|| Recorder::answering(b'A' as i32), |c| c.putchar(b'A'));
    assert_eq!(ok, b'A' as i32);
    assert_eq!(calls, [Call::Putchar(b'A')]);

    let (err, _) = forward(|| Recorder::answering(-1), |c| c.putchar(0xC4));
    assert_eq!(err, -1);
}

#[test]
fn putchar_passes_high_bytes_through_c_char() {
    let (_, calls) = forward(Recorder::default, |c| c.putchar(0xFF));
    assert_eq!(calls, [Call::Putchar(0xFF)]);
}

#[test]
fn puts_forwards_whole_string() {
    let (status, calls) = forward(|| Recorder::answering(12), |c| c.puts(c"Hello, world"));
    assert_eq!(status, 12);
    assert_eq!(calls, [Call::Puts(b"Hello, world".to_vec())]);

    let (status, _) = forward(|| Recorder::answering(-7), |c| c.puts(c""));
    assert_eq!(status, -7);
}

#[test]
fn getchar_returns_character_or_eof() {
    let typed = || Recorder { input: vec![b'q' as i32], ..Recorder::default() };
    let (ch, calls) = forward(typed, |c| c.getchar());
    assert_eq!(ch, b'q' as i32);
    assert_eq!(calls, [Call::Readc]);

    let (ch, _) = forward(Recorder::default, |c| c.getchar());
    assert_eq!(ch, EOF);
}

#[test]
fn read_key_maps_eof_to_none() {
    let mut host = Recorder { input: vec![b'x' as i32, 0xFF], ..Recorder::default() };
    let mut console = Console::new(&mut host);
    assert_eq!(console.read_key(), Some(b'x'));
    assert_eq!(console.read_key(), Some(0xFF));
    assert_eq!(console.read_key(), None);
}

#[test]
fn read_key_treats_other_errors_as_no_key() {
    let mut host = Recorder { input: vec![-2, 256, i32::MIN, b'k' as i32], ..Recorder::default() };
    let mut console = Console::new(&mut host);
    assert_eq!(console.read_key(), None);
    assert_eq!(console.read_key(), None);
    assert_eq!(console.read_key(), None);
    assert_eq!(console.read_key(), Some(b'k'));
}

#[test]
fn kbhit_is_passed_through() {
    assert_eq!(forward(|| Recorder::answering(0), |c| c.kbhit()), (0, vec![Call::Kbhit]));
    assert_eq!(forward(|| Recorder::answering(1), |c| c.kbhit()), (1, vec![Call::Kbhit]));
}

#[test]
fn wfvbi_and_frame_delay() {
    let (_, calls) = forward(Recorder::default, |c| {
        c.wfvbi();
        0
    });
    assert_eq!(calls, [Call::Wfvbi]);

    let (_, calls) = forward(Recorder::default, |c| {
        c.wait_frames(3);
        0
    });
    assert_eq!(calls, [Call::Wfvbi, Call::Wfvbi, Call::Wfvbi]);
}

#[test]
fn move_cursor_is_unchecked() {
    let (_, calls) = forward(Recorder::default, |c| {
        c.move_cursor(35, 47);
        c.move_cursor(255, 255);
        0
    });
    assert_eq!(calls, [Call::MoveCursor(35, 47), Call::MoveCursor(255, 255)]);
}

#[test]
fn play_forwards_every_argument() {
    let (status, calls) =
        forward(|| Recorder::answering(0), |c| c.play(44_000, Channel::Channel2, Waveform::Noise, 200));
    assert_eq!(status, 0);
    assert_eq!(calls, [Call::Play(44_000, Channel::Channel2, Waveform::Noise, 200)]);

    let (status, _) =
        forward(|| Recorder::answering(-5), |c| c.play(1, Channel::Channel0, Waveform::Sine, 0));
    assert_eq!(status, -5);
}

#[test]
fn font_switches() {
    let (_, calls) = forward(Recorder::default, |c| {
        c.font_teletext();
        c.font_custom(&FONT);
        c.font_normal();
        0
    });
    assert_eq!(
        calls,
        [
            Call::ChangeFont(FontMode::Teletext, None),
            Call::ChangeFont(FontMode::Custom, Some(&FONT as *const CustomFont)),
            Call::ChangeFont(FontMode::Normal, None),
        ]
    );
}

#[test]
fn joystick_state_is_raw() {
    let stick = || Recorder { joystick: 0b1110_0101, ..Recorder::default() };
    let (state, calls) = forward(stick, |c| c.get_joystick() as i32);
    assert_eq!(state, 0b1110_0101);
    assert_eq!(calls, [Call::GetJoystick]);
}

#[test]
fn sixels_and_integers_go_through_putchar() {
    let (_, calls) = forward(Recorder::default, |c| {
        c.put_connected_sixel(0xFF);
        c.put_separated_sixel(0);
        c.put_int(-42)
    });
    assert_eq!(
        calls,
        [Call::Putchar(0xDF), Call::Putchar(0xA0), Call::Putchar(b'-'), Call::Putchar(b'4'), Call::Putchar(b'2')]
    );
}

#[test]
fn put_int_stops_at_first_failure() {
    let (status, calls) = forward(|| Recorder::answering(-1), |c| c.put_int(12345));
    assert_eq!(status, -1);
    assert_eq!(calls, [Call::Putchar(b'1')]);
}

#[test]
fn fmt_write_uses_putchar() {
    let mut host = Recorder::answering(0);
    {
        let mut console = Console::new(&mut host);
        write!(console, "x={} y={}", 3, -20).unwrap();
    }
    assert_eq!(host.written(), b"x=3 y=-20");

    let mut failing = Recorder::answering(-1);
    let mut console = Console::new(&mut failing);
    assert!(write!(console, "nope").is_err());
}

#[test]
fn console_rand_matches_generator() {
    let mut host = Recorder::default();
    let mut console = Console::new(&mut host);
    let mut reference = Rand::new();
    assert_eq!(console.rand(), reference.rand());

    console.srand(42);
    reference.srand(42);
    for _ in 0..10 {
        assert_eq!(console.rand(), reference.rand());
    }
    drop(console);
    assert!(host.calls.is_empty());
}

#[test]
fn table_layout_is_ten_pointers_in_order() {
    let word = size_of::<usize>();
    assert_eq!(size_of::<Callbacks>(), 10 * word);
    assert_eq!(offset_of!(Callbacks, context), 0);
    assert_eq!(offset_of!(Callbacks, putchar), word);
    assert_eq!(offset_of!(Callbacks, puts), 2 * word);
    assert_eq!(offset_of!(Callbacks, readc), 3 * word);
    assert_eq!(offset_of!(Callbacks, wfvbi), 4 * word);
    assert_eq!(offset_of!(Callbacks, kbhit), 5 * word);
    assert_eq!(offset_of!(Callbacks, move_cursor), 6 * word);
    assert_eq!(offset_of!(Callbacks, play), 7 * word);
    assert_eq!(offset_of!(Callbacks, change_font), 8 * word);
    assert_eq!(offset_of!(Callbacks, get_joystick), 9 * word);
}

#[test]
fn host_side_rejects_bad_raw_values() {
    let mut host = Recorder::answering(0);
    {
        let table = Callbacks::from_host(&mut host);
        unsafe {
            assert_eq!((table.play)(table.context, 440, 7, 0, 10), -1);
            assert_eq!((table.play)(table.context, 440, 0, 9, 10), -1);
            (table.change_font)(table.context, 3, core::ptr::null());
            // custom mode without a payload never reaches the host
            (table.change_font)(table.context, 2, core::ptr::null());
            (table.change_font)(table.context, 2, &FONT as *const CustomFont as *const c_void);
            // other modes drop whatever pointer came along
            (table.change_font)(table.context, 1, &FONT as *const CustomFont as *const c_void);
            assert_eq!((table.putchar)(table.context, 0xFFu8 as c_char), 0);
        }
    }
    assert_eq!(
        host.calls,
        [
            Call::ChangeFont(FontMode::Custom, Some(&FONT as *const CustomFont)),
            Call::ChangeFont(FontMode::Teletext, None),
            Call::Putchar(0xFF),
        ]
    );
}

//! End-to-end `set_colour` handling: decode an operand, apply it to the
//! screen, paint with it, and read it back.

use zmachine_colour::palette::argb32;
use zmachine_colour::{is_sentinel, resolve};
use zmachine_core::{Observable, Version};
use zmachine_screen::{
    Change, Channel, Colour, ColourError, NoInspector, RecoveryPolicy, ScreenColours,
    ScreenConfig, ScreenError, TextGrid,
};

fn screen(version: u8) -> ScreenColours {
    let version = Version::new(version).expect("valid");
    ScreenColours::new(&ScreenConfig::for_version(version, true))
}

#[test]
fn green_replaces_active_colour() {
    let colour = resolve(4, false).expect("green is standard");
    assert_eq!(colour, Colour::Green);
    assert!(!is_sentinel(colour));

    let mut s = screen(5);
    let before = s.foreground();
    assert_eq!(
        s.set(Channel::Foreground, colour, &NoInspector),
        Change::Set(Colour::Green)
    );
    assert_ne!(s.foreground(), before);
    assert_eq!(s.foreground(), Colour::Green);
}

#[test]
fn current_leaves_state_byte_for_byte() {
    let colour = resolve(255, false).expect("current is a sentinel");
    assert_eq!(colour, Colour::Current);

    let mut s = screen(5);
    s.set_colour(6, 9, &NoInspector).expect("valid operands");
    let fg = s.query("foreground");
    let bg = s.query("background");

    assert_eq!(
        s.set_colour(255, 255, &NoInspector),
        Ok((Change::Kept, Change::Kept))
    );
    assert_eq!(s.query("foreground"), fg);
    assert_eq!(s.query("background"), bg);
}

#[test]
fn under_cursor_reads_back_painted_cell() {
    let mut s = screen(6);
    let mut grid = TextGrid::new(40, 10);

    s.set_colour(11, 7, &grid).expect("v6 greys");
    grid.put_char('#', &s);

    s.set_colour(2, 9, &grid).expect("valid operands");
    grid.move_cursor(0, 0);
    s.set_colour(0, 0, &grid).expect("sentinels are valid");

    assert_eq!(s.foreground(), Colour::MediumGrey);
    assert_eq!(s.background(), Colour::Magenta);
}

#[test]
fn under_cursor_before_any_paint_is_a_no_op() {
    let mut s = screen(5);
    let grid = TextGrid::new(40, 10);
    s.set_colour(3, 4, &grid).expect("valid operands");
    assert_eq!(
        s.set_colour(0, 0, &grid),
        Ok((Change::Kept, Change::Kept))
    );
    assert_eq!((s.foreground(), s.background()), (Colour::Red, Colour::Green));
}

#[test]
fn malformed_operand_aborts_by_default() {
    let mut s = screen(5);
    let err = s.set_colour(254, 2, &NoInspector).expect_err("254 is not a colour");
    assert!(matches!(
        err,
        ScreenError::Colour {
            channel: Channel::Foreground,
            source: ColourError::OutOfRange(254),
        }
    ));
    assert_eq!(s.foreground(), Colour::Default);
}

#[test]
fn lenient_host_keeps_running() {
    let version = Version::new(5).expect("valid");
    let config = ScreenConfig::for_version(version, true).with_policy(RecoveryPolicy::LENIENT);
    let mut s = ScreenColours::new(&config);
    assert!(s.set_colour(256, 12, &NoInspector).is_ok());
    assert_eq!(s.foreground(), Colour::Default);
    assert_eq!(s.background(), Colour::Default);
}

#[test]
fn rendered_pixels_follow_active_colours() {
    let mut s = screen(5);
    s.set_colour(9, 2, &NoInspector).expect("valid operands");
    assert_eq!(argb32(s.foreground(), Channel::Foreground), Some(0xFFFF_FFFF));
    assert_eq!(argb32(s.background(), Channel::Background), Some(0xFF00_0000));
}

#[test]
fn instances_are_independent() {
    let mut a = screen(5);
    let b = screen(5);
    a.set_colour(3, 3, &NoInspector).expect("valid operands");
    assert_eq!(b.foreground(), Colour::Default);
}

#[test]
fn direct_set_respects_host_capabilities() {
    let mut v5 = screen(5);
    assert_eq!(
        v5.set(Channel::Foreground, Colour::DarkGrey, &NoInspector),
        Change::Set(Colour::Default)
    );
    assert_eq!(v5.query("foreground"), Some(Colour::Default.value().into()));

    let mut v3 = screen(3);
    assert_eq!(v3.set(Channel::Background, Colour::Red, &NoInspector), Change::Kept);
    assert_eq!(v3.background(), Colour::Default);
}

use nixplat::console::{ConsoleColor, escape_sequence};
use nixplat::timer::Timer;
use nixplat::utils::platform::{
    Architecture, EndiannessCache, compiled_architecture, compiled_endianness,
    runtime_endianness_probe,
};

#[test]
fn test_architecture_and_byte_order_agree_with_target() {
    let arch = compiled_architecture();
    if cfg!(any(target_arch = "x86_64", target_arch = "aarch64")) {
        assert_ne!(arch, Architecture::Unknown);
    }

    assert_eq!(runtime_endianness_probe(), compiled_endianness());
    assert_eq!(EndiannessCache::new().get_or_probe(), runtime_endianness_probe());
}

#[test]
fn test_timer_never_goes_backwards() {
    for _ in 0..100 {
        let mut timer = Timer::new();
        timer.start();
        timer.stop();
        assert!(timer.stop >= timer.start);
    }
}

#[test]
fn test_every_color_has_an_escape() {
    for color in ConsoleColor::ALL {
        assert!(escape_sequence(true, color).starts_with("\x1b["));
        assert!(escape_sequence(false, color).ends_with('m'));
    }
}

//! Integration Tests für Frame-Driver und Display
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLedSink / MockDisplay

use ring_core::{
    ColorOrder, DisplayError, DisplayLine, FrameDriver, HUE_RED, LedError, LedSink,
    RenderableDisplay, RingConfig, StripConfig, rainbow_hue, show_identification,
};
use rgb::RGB8;

const NUM_LEDS: usize = 32;

// ============================================================================
// Mock LED Sink
// ============================================================================

#[derive(Default)]
pub struct MockLedSink {
    pub config: Option<StripConfig>,
    pub configure_count: usize,
    pub brightness: Option<u8>,
    pub last_frame: Vec<RGB8>,
    pub transmit_count: usize,
    pub fail_configure: bool,
    pub fail_next_transmit: bool,
}

impl MockLedSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedSink for MockLedSink {
    fn configure(&mut self, config: StripConfig) -> Result<(), LedError> {
        if self.fail_configure {
            return Err(LedError::ConfigFailed);
        }
        self.config = Some(config);
        self.configure_count += 1;
        Ok(())
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = Some(brightness);
    }

    fn transmit(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        if self.fail_next_transmit {
            self.fail_next_transmit = false;
            return Err(LedError::WriteFailed);
        }

        self.last_frame = pixels.to_vec();
        self.transmit_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Display
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCall {
    Init,
    Clear,
    Draw(usize),
    Commit,
}

#[derive(Default)]
pub struct MockDisplay {
    pub calls: Vec<DisplayCall>,
    pub lines: Vec<DisplayLine>,
    pub fail_init: bool,
    pub fail_draw: bool,
}

impl RenderableDisplay for MockDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        if self.fail_init {
            return Err(DisplayError::InitFailed);
        }
        self.calls.push(DisplayCall::Init);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.lines.clear();
        self.calls.push(DisplayCall::Clear);
        Ok(())
    }

    fn draw_lines(&mut self, lines: &[DisplayLine]) -> Result<(), DisplayError> {
        if self.fail_draw {
            return Err(DisplayError::DrawFailed);
        }
        self.lines.extend_from_slice(lines);
        self.calls.push(DisplayCall::Draw(lines.len()));
        Ok(())
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        self.calls.push(DisplayCall::Commit);
        Ok(())
    }
}

fn ring_config() -> RingConfig {
    RingConfig {
        channel: 0,
        color_order: ColorOrder::Rgb,
        brightness: 255,
        initial_hue: HUE_RED,
    }
}

// ============================================================================
// Tests: Initialisierung
// ============================================================================

#[test]
fn test_driver_registers_strip_once() {
    let driver = FrameDriver::<_, NUM_LEDS>::new(MockLedSink::new(), ring_config()).unwrap();

    let sink = driver.sink();
    assert_eq!(sink.configure_count, 1);
    assert_eq!(
        sink.config,
        Some(StripConfig {
            channel: 0,
            pixel_count: NUM_LEDS,
            color_order: ColorOrder::Rgb,
        })
    );
    assert_eq!(sink.brightness, Some(255));
    assert_eq!(sink.transmit_count, 0);
    assert_eq!(driver.state().start_hue(), HUE_RED);
}

#[test]
fn test_driver_config_failure() {
    let mut sink = MockLedSink::new();
    sink.fail_configure = true;

    let result = FrameDriver::<_, NUM_LEDS>::new(sink, ring_config());
    assert!(matches!(result, Err(LedError::ConfigFailed)));
}

// ============================================================================
// Tests: Frames
// ============================================================================

#[test]
fn test_first_frame_is_one_color_wheel() {
    let mut driver = FrameDriver::<_, NUM_LEDS>::new(MockLedSink::new(), ring_config()).unwrap();
    assert_eq!(driver.render_frame(), Ok(0));

    let frame = &driver.sink().last_frame;
    assert_eq!(frame.len(), NUM_LEDS);
    assert_eq!(frame[0], RGB8::new(255, 0, 0));
    assert_eq!(rainbow_hue(frame[16]), Some(128));
    assert_eq!(rainbow_hue(frame[31]), Some(248));
}

#[test]
fn test_animation_progression() {
    let mut driver = FrameDriver::<_, NUM_LEDS>::new(MockLedSink::new(), ring_config()).unwrap();

    for frame in 0..600usize {
        let hue = driver.render_frame().unwrap();
        assert_eq!(hue as usize, frame % 256);
        assert_eq!(
            rainbow_hue(driver.sink().last_frame[0]),
            Some((frame % 256) as u8)
        );
    }
    assert_eq!(driver.sink().transmit_count, 600);
    assert_eq!(driver.frames(), 600);
}

#[test]
fn test_every_pixel_follows_gradient() {
    let mut driver = FrameDriver::<_, NUM_LEDS>::new(MockLedSink::new(), ring_config()).unwrap();

    for _ in 0..300 {
        let start = driver.render_frame().unwrap();
        for (i, &color) in driver.sink().last_frame.iter().enumerate() {
            let expected = start.wrapping_add((i as u8).wrapping_mul(8));
            assert_eq!(rainbow_hue(color), Some(expected));
        }
    }
}

#[test]
fn test_transmitted_frame_matches_buffer() {
    let mut driver = FrameDriver::<_, NUM_LEDS>::new(MockLedSink::new(), ring_config()).unwrap();
    driver.render_frame().unwrap();
    assert_eq!(driver.sink().last_frame.as_slice(), driver.pixels().as_slice());
}

#[test]
fn test_transmit_failure_keeps_animating() {
    let mut driver = FrameDriver::<_, NUM_LEDS>::new(MockLedSink::new(), ring_config()).unwrap();
    driver.render_frame().unwrap();

    driver.sink_mut().fail_next_transmit = true;
    assert_eq!(driver.render_frame(), Err(LedError::WriteFailed));
    assert_eq!(driver.sink().transmit_count, 1);

    // Der fehlgeschlagene Frame zählt trotzdem, es geht mit Hue 2 weiter
    assert_eq!(driver.render_frame(), Ok(2));
    assert_eq!(driver.sink().transmit_count, 2);
}

#[test]
fn test_custom_initial_hue() {
    let config = RingConfig {
        initial_hue: 200,
        ..ring_config()
    };
    let mut driver = FrameDriver::<_, 8>::new(MockLedSink::new(), config).unwrap();
    assert_eq!(driver.hue_step(), 32);
    assert_eq!(driver.render_frame(), Ok(200));
    assert_eq!(rainbow_hue(driver.sink().last_frame[7]), Some(200u8.wrapping_add(7 * 32)));
}

// ============================================================================
// Tests: Display
// ============================================================================

const LINES: [DisplayLine; 4] = [
    DisplayLine::new(0, 0, "  Property of"),
    DisplayLine::new(0, 1, "  Scott Cooper"),
    DisplayLine::new(0, 5, " Rainbow Ring by"),
    DisplayLine::new(0, 6, "  Dave's Garage"),
];

#[test]
fn test_show_identification_order() {
    let mut display = MockDisplay::default();
    show_identification(&mut display, &LINES).unwrap();

    assert_eq!(
        display.calls,
        vec![
            DisplayCall::Init,
            DisplayCall::Clear,
            DisplayCall::Draw(4),
            DisplayCall::Commit
        ]
    );
    assert_eq!(display.lines, LINES.to_vec());
}

#[test]
fn test_show_identification_stops_on_init_failure() {
    let mut display = MockDisplay {
        fail_init: true,
        ..Default::default()
    };
    assert_eq!(
        show_identification(&mut display, &LINES),
        Err(DisplayError::InitFailed)
    );
    assert!(display.calls.is_empty());
}

#[test]
fn test_show_identification_no_commit_after_draw_failure() {
    let mut display = MockDisplay {
        fail_draw: true,
        ..Default::default()
    };
    assert_eq!(
        show_identification(&mut display, &LINES),
        Err(DisplayError::DrawFailed)
    );
    assert_eq!(display.calls, vec![DisplayCall::Init, DisplayCall::Clear]);
}

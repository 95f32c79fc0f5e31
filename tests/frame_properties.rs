use ascii_blobs::{
    engine::{
        field::field,
        glyph::to_glyph,
        pointer::perturb,
        reveal::{reveal, visible_chars, FRAME_PERIOD, REVEAL_FRAMES},
        Engine,
    },
    player::state::AnimationState,
    renderer::Renderer,
    types::{FieldKind, FrameInput, PointerState, SurfaceBox, GRID_HEIGHT, GRID_WIDTH},
};

fn render(frame: u32, field: FieldKind, pointer: PointerState, surface: Option<SurfaceBox>) -> String {
    Renderer::to_text(&Engine::render_frame(&FrameInput {
        frame,
        field,
        pointer,
        surface,
    }))
}

#[test]
fn every_frame_is_forty_rows_of_eighty_glyphs() {
    let pressed = PointerState {
        x: 5.0,
        y: 5.0,
        pressed: true,
    };
    let surface = SurfaceBox {
        left: 0.0,
        top: 0.0,
        width: 80.0,
        height: 40.0,
    };
    for frame in (0..FRAME_PERIOD).step_by(37) {
        for field in FieldKind::ALL {
            for (pointer, surface) in [
                (PointerState::default(), None),
                (pressed, Some(surface)),
                (pressed, None),
            ] {
                let text = render(frame, field, pointer, surface);
                let lines: Vec<&str> = text.split_terminator('\n').collect();
                assert_eq!(lines.len(), GRID_HEIGHT);
                assert!(lines.iter().all(|l| l.chars().count() == GRID_WIDTH));
            }
        }
    }
}

#[test]
fn reveal_runs_from_empty_to_full_and_restarts_on_wrap() {
    let mut state = AnimationState::default();
    let counts = |frame| [0, 1, 2].map(|line| visible_chars(frame, line));
    assert_eq!(counts(state.frame), [0, 0, 0]);

    let mut prev = counts(state.frame);
    for _ in 1..FRAME_PERIOD {
        state.tick();
        let now = counts(state.frame);
        assert!(now.iter().zip(prev).all(|(n, p)| *n >= p));
        if state.frame >= REVEAL_FRAMES {
            assert_eq!(now, [4, 7, 3]);
        }
        prev = now;
    }
    state.tick();
    assert_eq!(state.frame, 0);
    assert_eq!(counts(state.frame), [0, 0, 0]);
}

#[test]
fn full_message_appears_in_the_text_block() {
    let text = render(REVEAL_FRAMES, FieldKind::Balance, PointerState::default(), None);
    let lines: Vec<&str> = text.lines().collect();
    let spaced = |line: &str, start: usize, n: usize| -> String {
        line.chars().skip(start).step_by(2).take(n).collect()
    };
    assert_eq!(spaced(lines[16], 36, 4), "HARB");
    assert_eq!(spaced(lines[20], 33, 7), "NAWARTU");
    assert_eq!(spaced(lines[24], 37, 3), "AWA");
    assert_eq!(reveal(REVEAL_FRAMES).lines[2].text, "AWA");
}

#[test]
fn released_pointer_leaves_the_frame_unchanged() {
    let surface = Some(SurfaceBox {
        left: 0.0,
        top: 0.0,
        width: 80.0,
        height: 40.0,
    });
    let released = PointerState {
        x: 40.0,
        y: 20.0,
        pressed: false,
    };
    assert_eq!(
        render(45, FieldKind::Flow, released, surface),
        render(45, FieldKind::Flow, PointerState::default(), None)
    );
    assert_eq!(perturb(1.0, 2.0, 3.0, &released, surface), 0.0);
}

#[test]
fn missing_surface_box_disables_the_ripple() {
    let pressed = PointerState {
        x: 40.0,
        y: 20.0,
        pressed: true,
    };
    assert_eq!(
        render(45, FieldKind::Chaos, pressed, None),
        render(45, FieldKind::Chaos, PointerState::default(), None)
    );
}

#[test]
fn clicks_cycle_through_all_fields() {
    let mut state = AnimationState::default();
    let mut seen = vec![state.field];
    for _ in 0..4 {
        state.click();
        seen.push(state.field);
    }
    assert_eq!(
        seen,
        vec![
            FieldKind::Balance,
            FieldKind::Duality,
            FieldKind::Flow,
            FieldKind::Chaos,
            FieldKind::Balance
        ]
    );
}

#[test]
fn duality_splits_at_the_centre_column() {
    let t = 2.5_f64;
    let y = 11.0_f64;
    let shared = (y * 0.3 + t * 0.2).sin();
    let left = field(FieldKind::Duality, 39.0, y, t) - shared;
    let right = field(FieldKind::Duality, 40.0, y, t) - shared;
    assert!((left - (39.0_f64 * 0.2 + t * 0.3).sin()).abs() < 1e-12);
    assert!((right - (40.0_f64 * 0.2 - t * 0.3).cos()).abs() < 1e-12);
}

#[test]
fn glyph_bands() {
    let glyphs: Vec<char> = [0.9, 0.6, 0.3, 0.0, -0.3, -0.6].map(to_glyph).to_vec();
    assert_eq!(glyphs, vec!['█', '▓', '▒', '░', '·', ' ']);
    assert_eq!(to_glyph(0.8), '▓');
}

//! Tests for render configuration, tile assignment and cancellation

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tilepattern::algorithm::renderer::{
        CancelToken, PatternRenderer, RenderConfig, render_pattern,
    };
    use tilepattern::color::palette::{Palette, Rgb};
    use tilepattern::color::presets::PalettePreset;
    use tilepattern::io::error::PatternError;
    use tilepattern::math::random::Seed;

    fn golden_config() -> RenderConfig {
        let mut config = RenderConfig::new(Seed::from_text("abc"), PalettePreset::Dark.palette());
        config.width = 128;
        config.height = 128;
        config.tile_size = 64;
        config.randomness_softness = 64.0;
        config.noise_softness = 0.0;
        config
    }

    fn parameter_of(err: &PatternError) -> Option<&'static str> {
        match err {
            PatternError::InvalidParameter { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }

    // Tests defaults match the documented canvas
    // Verified by changing a default constant
    #[test]
    fn test_config_defaults() {
        let config = RenderConfig::new(Seed(1), Palette::new());
        assert_eq!((config.width, config.height, config.tile_size), (512, 512, 48));
        assert!((config.noise_softness - 8.0).abs() < f64::EPSILON);
        assert!((config.randomness_softness - 64.0).abs() < f64::EPSILON);
    }

    // Tests each out-of-range parameter is named in the error
    // Verified by clamping instead of rejecting
    #[test]
    fn test_validate_rejects_parameters() {
        let base = golden_config();
        assert!(base.validate().is_ok());

        let mut config = base.clone();
        config.width = 0;
        assert_eq!(parameter_of(&config.validate().unwrap_err()), Some("width"));

        let mut config = base.clone();
        config.height = 0;
        assert_eq!(parameter_of(&config.validate().unwrap_err()), Some("height"));

        let mut config = base.clone();
        config.tile_size = 0;
        assert_eq!(parameter_of(&config.validate().unwrap_err()), Some("tile_size"));

        for softness in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let mut config = base.clone();
            config.randomness_softness = softness;
            assert_eq!(
                parameter_of(&config.validate().unwrap_err()),
                Some("randomness_softness")
            );
        }

        for softness in [-0.5, f64::NAN] {
            let mut config = base.clone();
            config.noise_softness = softness;
            assert_eq!(
                parameter_of(&config.validate().unwrap_err()),
                Some("noise_softness")
            );
        }
    }

    // Tests an empty palette is rejected before any rendering
    // Verified by letting the compositor report the empty palette
    #[test]
    fn test_empty_palette_rejected() {
        let mut config = golden_config();
        config.palette = Palette::new();

        assert!(matches!(
            PatternRenderer::new(&config).err(),
            Some(PatternError::InvalidPalette { .. })
        ));
    }

    // Tests the renderer indexes a luminance-sorted copy of the palette
    // Verified by indexing the stored order
    #[test]
    fn test_ordered_palette() {
        let config = golden_config();
        let renderer = PatternRenderer::new(&config).unwrap();

        assert_eq!(
            renderer.ordered_palette(),
            &[
                Rgb::new(36, 36, 36),
                Rgb::new(39, 39, 39),
                Rgb::new(42, 42, 42),
                Rgb::new(45, 45, 45),
            ]
        );
    }

    // Tests tile assignments for a known seed, margin tiles included
    // Verified by sampling centroids without the softness divisor
    #[test]
    fn test_tile_grid_known_seed() {
        let config = golden_config();
        let grid = PatternRenderer::new(&config).unwrap().tile_grid().unwrap();

        assert_eq!(grid.window().cols, 4);
        assert_eq!(grid.indices_at(0, 0), Some([3, 3]));
        assert_eq!(grid.indices_at(1, 0), Some([3, 3]));
        assert_eq!(grid.indices_at(0, 1), Some([0, 3]));
        assert_eq!(grid.indices_at(1, 1), Some([3, 3]));
        assert_eq!(grid.indices_at(-1, -1), Some([2, 2]));
        assert_eq!(grid.indices_at(2, 2), Some([3, 3]));
        assert_eq!(grid.indices_at(-1, 2), Some([0, 0]));
    }

    // Tests the observer sees every window row in order
    // Verified by reporting the zero-based row offset
    #[test]
    fn test_row_observer_progress() {
        let config = golden_config();
        let mut seen = Vec::new();
        {
            let mut renderer = PatternRenderer::new(&config)
                .unwrap()
                .with_row_observer(|done, total| seen.push((done, total)));
            renderer.tile_grid().unwrap();
        }
        assert_eq!(seen, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }

    // Tests a cancelled token stops before the first row
    // Verified by checking the token only after the loop
    #[test]
    fn test_cancel_before_start() {
        let config = golden_config();
        let token = CancelToken::new();
        token.cancel();

        let result = PatternRenderer::new(&config)
            .unwrap()
            .with_cancel_token(token)
            .render(&mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(PatternError::Cancelled { row: 0 })));
    }

    // Tests cancelling mid-render stops at the next row boundary
    // Verified by checking the token once per render
    #[test]
    fn test_cancel_between_rows() {
        let config = golden_config();
        let token = CancelToken::new();
        let trigger = token.clone();

        let result = PatternRenderer::new(&config)
            .unwrap()
            .with_cancel_token(token)
            .with_row_observer(move |done, _| {
                if done == 2 {
                    trigger.cancel();
                }
            })
            .render(&mut StdRng::seed_from_u64(0));

        assert!(matches!(result, Err(PatternError::Cancelled { row: 2 })));
    }

    // Tests an uncancelled token does not interfere
    // Verified by inverting the cancellation check
    #[test]
    fn test_idle_token_renders() {
        let config = golden_config();
        let token = CancelToken::new();
        assert!(!token.is_cancelled());

        let image = PatternRenderer::new(&config)
            .unwrap()
            .with_cancel_token(token)
            .render(&mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(image.dimensions(), (128, 128));
    }

    // Tests the one-call entry point validates first
    // Verified by skipping validation in the shortcut
    #[test]
    fn test_render_pattern_validates() {
        let mut config = golden_config();
        config.tile_size = 0;
        let result = render_pattern(&config, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(PatternError::InvalidParameter { .. })));
    }
}

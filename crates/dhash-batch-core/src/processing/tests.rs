#[allow(clippy::module_inception)]
#[cfg(test)]
mod tests {
    use crate::config::{GridShape, HashConfig};
    use crate::processing::{compute_batch, dhash, dhash_horizontal, dhash_vertical, BatchHasher};
    use crate::types::HashRequest;
    use image::{DynamicImage, Rgb, RgbImage};

    fn solid(rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb(rgb)))
    }

    fn falling_left_to_right() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(100, 100, |x, _| {
            let v = ((99 - x) * 255 / 99) as u8;
            Rgb([v, v, v])
        }))
    }

    fn falling_top_to_bottom() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(100, 100, |_, y| {
            let v = ((99 - y) * 255 / 99) as u8;
            Rgb([v, v, v])
        }))
    }

    #[test]
    fn test_uniform_image_horizontal_is_zero() {
        let results = compute_batch(&solid([40, 180, 220]), &[HashRequest::horizontal(8)]).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].as_bytes(), &[0x00]);
    }

    #[test]
    fn test_results_follow_request_order() {
        let img = falling_left_to_right();
        let requests = [
            HashRequest::vertical(8),
            HashRequest::horizontal(8),
            HashRequest::combined(4),
        ];
        let results = compute_batch(&img, &requests).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_bytes(), &[0x00]);
        assert_eq!(results[1].as_bytes(), &[0xff]);
        assert_eq!(results[2].as_bytes(), &[0xf0]);
    }

    #[test]
    fn test_vertical_detects_top_to_bottom_fall() {
        let img = falling_top_to_bottom();
        let results =
            compute_batch(&img, &[HashRequest::vertical(8), HashRequest::horizontal(8)]).unwrap();
        assert_eq!(results[0].as_bytes(), &[0xff]);
        assert_eq!(results[1].as_bytes(), &[0x00]);
    }

    #[test]
    fn test_empty_batch_is_invalid() {
        let err = compute_batch(&solid([0, 0, 0]), &[]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_zero_length_is_invalid() {
        let requests = [HashRequest::horizontal(8), HashRequest::combined(0)];
        let err = compute_batch(&solid([0, 0, 0]), &requests).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_length_above_limit_is_invalid() {
        let hasher = BatchHasher::new(HashConfig {
            max_length: 16,
            ..HashConfig::default()
        });
        let err = hasher
            .compute(&solid([0, 0, 0]), &[HashRequest::horizontal(17)])
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_config_above_ceiling_is_rejected_before_allocating() {
        let hasher = BatchHasher::new(HashConfig {
            max_length: u32::MAX - 1,
            ..HashConfig::default()
        });
        let err = hasher
            .compute(&solid([0, 0, 0]), &[HashRequest::horizontal(u32::MAX - 1)])
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_empty_image_fails_preprocessing() {
        let err = dhash(&DynamicImage::new_rgb8(0, 0), 8).unwrap_err();
        assert!(err.is_preprocess());
    }

    #[test]
    fn test_short_grid_cannot_serve_vertical_at_max_length() {
        let hasher = BatchHasher::new(HashConfig {
            grid_shape: GridShape::Short,
            ..HashConfig::default()
        });
        let img = falling_top_to_bottom();

        assert!(hasher.compute(&img, &[HashRequest::horizontal(8)]).is_ok());

        let err = hasher
            .compute(&img, &[HashRequest::horizontal(8), HashRequest::vertical(8)])
            .unwrap_err();
        assert!(err.is_encode());

        // A shorter vertical request fits under a longer horizontal one
        let results = hasher
            .compute(&img, &[HashRequest::horizontal(8), HashRequest::vertical(7)])
            .unwrap();
        assert_eq!(results[1].bit_len(), 7);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let img = falling_left_to_right();
        let requests: Vec<HashRequest> = (1..=12)
            .flat_map(|n| {
                [
                    HashRequest::horizontal(n),
                    HashRequest::vertical(n),
                    HashRequest::combined(n),
                ]
            })
            .collect();

        let sequential = BatchHasher::default().compute(&img, &requests).unwrap();
        let parallel = BatchHasher::new(HashConfig {
            parallel: true,
            ..HashConfig::default()
        })
        .compute(&img, &requests)
        .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_reports_same_error_as_sequential() {
        let config = HashConfig {
            grid_shape: GridShape::Short,
            ..HashConfig::default()
        };
        let requests = [
            HashRequest::horizontal(8),
            HashRequest::vertical(8),
            HashRequest::combined(8),
        ];
        let img = falling_left_to_right();

        let sequential = BatchHasher::new(config.clone())
            .compute(&img, &requests)
            .unwrap_err();
        let parallel = BatchHasher::new(HashConfig {
            parallel: true,
            ..config
        })
        .compute(&img, &requests)
        .unwrap_err();

        assert!(sequential.is_encode());
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_single_shot_helpers_match_batch() {
        let img = falling_left_to_right();
        let batch = compute_batch(
            &img,
            &[
                HashRequest::horizontal(16),
                HashRequest::vertical(16),
                HashRequest::combined(16),
            ],
        )
        .unwrap();

        assert_eq!(dhash_horizontal(&img, 16).unwrap(), batch[0]);
        assert_eq!(dhash_vertical(&img, 16).unwrap(), batch[1]);
        assert_eq!(dhash(&img, 16).unwrap(), batch[2]);
    }
}

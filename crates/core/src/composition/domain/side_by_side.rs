use ndarray::Axis;
use thiserror::Error;

use crate::shared::frame::Frame;

/// Composition precondition violations, reported with enough sequence
/// metadata to diagnose which input was off.
#[derive(Error, Debug)]
pub enum CompositionError {
    #[error("base sequence is empty; cannot cycle it under {generated_len} generated frames")]
    EmptyBase { generated_len: usize },

    /// Heights must match exactly; frames are never auto-resized.
    #[error(
        "frame height mismatch: base is {base_width}x{base_height}, \
         generated is {generated_width}x{generated_height}"
    )]
    HeightMismatch {
        base_width: u32,
        base_height: u32,
        generated_width: u32,
        generated_height: u32,
    },

    #[error("channel depth mismatch: base has {base_channels}, generated has {generated_channels}")]
    ChannelMismatch {
        base_channels: u8,
        generated_channels: u8,
    },
}

/// Builds side-by-side comparison frames: base on the left, generated on
/// the right.
///
/// Pure over its inputs — frames are only read, never resized or mutated.
pub struct SideBySideCompositor;

impl SideBySideCompositor {
    pub fn new() -> Self {
        Self
    }

    /// Concatenates one pair horizontally. The output is
    /// `base.width + generated.width` wide and exactly as tall as both
    /// inputs, which must share height and channel depth.
    pub fn composite(
        &self,
        base: &Frame,
        generated: &Frame,
        index: usize,
    ) -> Result<Frame, CompositionError> {
        if base.height() != generated.height() {
            return Err(CompositionError::HeightMismatch {
                base_width: base.width(),
                base_height: base.height(),
                generated_width: generated.width(),
                generated_height: generated.height(),
            });
        }
        if base.channels() != generated.channels() {
            return Err(CompositionError::ChannelMismatch {
                base_channels: base.channels(),
                generated_channels: generated.channels(),
            });
        }

        let combined = ndarray::concatenate(Axis(1), &[base.as_ndarray(), generated.as_ndarray()])
            .expect("equal heights and channel depths were checked above");
        let data: Vec<u8> = combined.iter().copied().collect();

        Ok(Frame::new(
            data,
            base.width() + generated.width(),
            base.height(),
            base.channels(),
            index,
        ))
    }

    /// Pairs every generated frame with a base frame, cycling the base
    /// sequence when it is shorter. Output frame `i` is
    /// `base[i % base.len()] | generated[i]`, so the generated sequence
    /// always drives the output length.
    pub fn compose(
        &self,
        base: &[Frame],
        generated: &[Frame],
    ) -> Result<Vec<Frame>, CompositionError> {
        if base.is_empty() {
            return Err(CompositionError::EmptyBase {
                generated_len: generated.len(),
            });
        }

        generated
            .iter()
            .enumerate()
            .map(|(i, gen_frame)| self.composite(&base[i % base.len()], gen_frame, i))
            .collect()
    }
}

impl Default for SideBySideCompositor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn solid(w: u32, h: u32, rgb: [u8; 3], index: usize) -> Frame {
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for _ in 0..(w * h) {
            data.extend_from_slice(&rgb);
        }
        Frame::new(data, w, h, 3, index)
    }

    const RED: [u8; 3] = [255, 0, 0];
    const BLUE: [u8; 3] = [0, 0, 255];
    const GREEN: [u8; 3] = [0, 255, 0];

    #[test]
    fn test_composite_adds_widths_and_keeps_height() {
        let compositor = SideBySideCompositor::new();
        let out = compositor
            .composite(&solid(10, 10, RED, 0), &solid(14, 10, BLUE, 0), 0)
            .unwrap();
        assert_eq!(out.width(), 24);
        assert_eq!(out.height(), 10);
        assert_eq!(out.channels(), 3);
    }

    #[test]
    fn test_composite_places_base_left_generated_right() {
        let compositor = SideBySideCompositor::new();
        let out = compositor
            .composite(&solid(2, 2, RED, 0), &solid(3, 2, BLUE, 0), 0)
            .unwrap();

        for row in 0..2 {
            let row_bytes = out.row(row);
            assert_eq!(&row_bytes[..6], &[255, 0, 0, 255, 0, 0]);
            assert_eq!(&row_bytes[6..], &[0, 0, 255, 0, 0, 255, 0, 0, 255]);
        }
    }

    #[rstest]
    #[case(10, 10, 10, 12)]
    #[case(10, 12, 10, 10)]
    #[case(4, 1, 4, 2)]
    fn test_composite_rejects_height_mismatch(
        #[case] base_w: u32,
        #[case] base_h: u32,
        #[case] gen_w: u32,
        #[case] gen_h: u32,
    ) {
        let compositor = SideBySideCompositor::new();
        let err = compositor
            .composite(
                &solid(base_w, base_h, RED, 0),
                &solid(gen_w, gen_h, BLUE, 0),
                0,
            )
            .unwrap_err();
        match err {
            CompositionError::HeightMismatch {
                base_height,
                generated_height,
                ..
            } => {
                assert_eq!(base_height, base_h);
                assert_eq!(generated_height, gen_h);
            }
            other => panic!("expected HeightMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_compose_length_follows_generated() {
        let compositor = SideBySideCompositor::new();
        let base: Vec<_> = (0..7).map(|i| solid(10, 10, RED, i)).collect();
        let generated: Vec<_> = (0..3).map(|i| solid(10, 10, BLUE, i)).collect();
        let out = compositor.compose(&base, &generated).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_compose_empty_base_is_rejected() {
        let compositor = SideBySideCompositor::new();
        let generated: Vec<_> = (0..4).map(|i| solid(10, 10, BLUE, i)).collect();
        let err = compositor.compose(&[], &generated).unwrap_err();
        match err {
            CompositionError::EmptyBase { generated_len } => assert_eq!(generated_len, 4),
            other => panic!("expected EmptyBase, got {other:?}"),
        }
    }

    #[test]
    fn test_compose_empty_generated_yields_no_frames() {
        let compositor = SideBySideCompositor::new();
        let base = vec![solid(10, 10, RED, 0)];
        let out = compositor.compose(&base, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_compose_cycles_shorter_base() {
        // 3 distinct base frames against 5 generated: frames 3 and 4 must
        // wrap around to base[0] and base[1].
        let compositor = SideBySideCompositor::new();
        let base = vec![
            solid(10, 10, RED, 0),
            solid(10, 10, GREEN, 1),
            solid(10, 10, BLUE, 2),
        ];
        let generated: Vec<_> = (0..5).map(|i| solid(10, 10, BLUE, i)).collect();

        let out = compositor.compose(&base, &generated).unwrap();
        assert_eq!(out.len(), 5);

        for (i, frame) in out.iter().enumerate() {
            assert_eq!(frame.width(), 20);
            assert_eq!(frame.height(), 10);
            assert_eq!(frame.index(), i);

            let expected_left = &base[i % base.len()];
            for row in 0..frame.height() {
                let left_half = &frame.row(row)[..10 * 3];
                assert_eq!(
                    left_half,
                    expected_left.row(row),
                    "frame {i} row {row}: left half must equal base[{}]",
                    i % base.len()
                );
            }
        }
    }

    #[test]
    fn test_compose_does_not_mutate_inputs() {
        let compositor = SideBySideCompositor::new();
        let base = vec![solid(4, 4, RED, 0)];
        let generated = vec![solid(4, 4, BLUE, 0)];
        let base_bytes: Vec<u8> = base[0].data().to_vec();

        compositor.compose(&base, &generated).unwrap();
        assert_eq!(base[0].data(), &base_bytes[..]);
    }
}

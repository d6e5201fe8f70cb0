use crate::shared::frame::Frame;

/// An ordered run of same-sized frames with the frame rate they were
/// decoded at.
///
/// Length is however many frames could be decoded before end-of-stream;
/// a sequence is read exactly once, by exactly one consumer.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    fps: f64,
}

impl FrameSequence {
    pub fn new(frames: Vec<Frame>, fps: f64) -> Self {
        Self { frames, fps }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Width and height shared by every frame, or `None` when empty.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(|f| (f.width(), f.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, value: u8, index: usize) -> Frame {
        Frame::new(vec![value; (w * h * 3) as usize], w, h, 3, index)
    }

    #[test]
    fn test_len_and_fps() {
        let seq = FrameSequence::new(vec![solid(4, 4, 0, 0), solid(4, 4, 1, 1)], 24.0);
        assert_eq!(seq.len(), 2);
        assert!(!seq.is_empty());
        assert_eq!(seq.fps(), 24.0);
    }

    #[test]
    fn test_empty_sequence_has_no_dimensions() {
        let seq = FrameSequence::new(vec![], 30.0);
        assert!(seq.is_empty());
        assert_eq!(seq.dimensions(), None);
    }

    #[test]
    fn test_dimensions_come_from_first_frame() {
        let seq = FrameSequence::new(vec![solid(8, 6, 0, 0)], 30.0);
        assert_eq!(seq.dimensions(), Some((8, 6)));
    }
}

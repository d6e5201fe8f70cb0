use ndarray::ArrayView3;

/// One decoded still image: contiguous RGB bytes in row-major order.
///
/// Frames are immutable once decoded; the composition stage only ever reads
/// them and builds new frames from the pixel data. Format conversion happens
/// at the I/O boundary, so everything above it sees plain RGB24.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Position of this frame in decode order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The raw bytes of one pixel row.
    pub fn row(&self, row: u32) -> &[u8] {
        let stride = (self.width as usize) * (self.channels as usize);
        let start = (row as usize) * stride;
        &self.data[start..start + stride]
    }

    /// A `(height, width, channels)` view over the pixel data.
    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        let shape = (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        );
        ArrayView3::from_shape(shape, &self.data).expect("Frame data length must match dimensions")
    }
}

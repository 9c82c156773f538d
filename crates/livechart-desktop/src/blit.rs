// File: crates/livechart-desktop/src/blit.rs
// Summary: Convert the renderer's RGBA8 buffer into softbuffer's 0RGB u32 pixels.

/// Copies as many whole pixels as both buffers hold.
pub fn rgba_to_0rgb(rgba: &[u8], frame: &mut [u32]) {
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_channels_and_drops_alpha() {
        let rgba = [0x12, 0x34, 0x56, 0xFF, 0xFF, 0x00, 0x80, 0x10];
        let mut frame = [0u32; 2];
        rgba_to_0rgb(&rgba, &mut frame);
        assert_eq!(frame, [0x0012_3456, 0x00FF_0080]);
    }

    #[test]
    fn short_source_leaves_tail() {
        let mut frame = [7u32; 3];
        rgba_to_0rgb(&[1, 2, 3, 4], &mut frame);
        assert_eq!(frame, [0x0001_0203, 7, 7]);
    }
}

//! Fills the colour channels of fully transparent pixels with the average
//! colour of their nearest visible neighbours. Alpha is left untouched, so the
//! image looks the same, but Lanczos resampling no longer drags black fringes
//! in from transparent borders.

use bit_vec::BitVec;
use image::{Rgba, RgbaImage};

const NEIGHBOURS: &[(i64, i64)] = &[
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Row-major bit set over the pixel grid.
struct PixelMask {
    width: u32,
    bits: BitVec,
}

impl PixelMask {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            bits: BitVec::from_elem(width as usize * height as usize, false),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        self.bits.get(self.index(x, y)).unwrap_or(false)
    }

    fn insert(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.bits.set(i, true);
    }
}

fn neighbours(width: u32, height: u32, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> {
    NEIGHBOURS.iter().filter_map(move |(dx, dy)| {
        let nx = i64::from(x) + dx;
        let ny = i64::from(y) + dy;
        let in_bounds = nx >= 0 && ny >= 0 && nx < i64::from(width) && ny < i64::from(height);
        in_bounds.then_some((nx as u32, ny as u32))
    })
}

pub fn alpha_bleed(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();

    // Pixels whose colour may be sampled by a neighbour.
    let mut sampled = PixelMask::new(width, height);
    // Pixels already visible or already queued.
    let mut seen = PixelMask::new(width, height);
    let mut frontier = Vec::new();

    for (x, y, px) in img.enumerate_pixels() {
        if px[3] != 0 {
            sampled.insert(x, y);
            seen.insert(x, y);
        }
    }

    for (x, y, px) in img.enumerate_pixels() {
        if px[3] != 0 {
            continue;
        }
        if neighbours(width, height, x, y).any(|(nx, ny)| img.get_pixel(nx, ny)[3] != 0) {
            seen.insert(x, y);
            frontier.push((x, y));
        }
    }

    while !frontier.is_empty() {
        let mut next = Vec::new();
        let mut filled = Vec::with_capacity(frontier.len());

        for &(x, y) in &frontier {
            let mut sum = [0u32; 3];
            let mut count = 0u32;

            for (nx, ny) in neighbours(width, height, x, y) {
                if sampled.contains(nx, ny) {
                    let src = img.get_pixel(nx, ny);
                    sum[0] += u32::from(src[0]);
                    sum[1] += u32::from(src[1]);
                    sum[2] += u32::from(src[2]);
                    count += 1;
                } else if !seen.contains(nx, ny) {
                    seen.insert(nx, ny);
                    next.push((nx, ny));
                }
            }

            let count = count.max(1);
            let colour = Rgba([
                (sum[0] / count) as u8,
                (sum[1] / count) as u8,
                (sum[2] / count) as u8,
                0,
            ]);
            filled.push((x, y, colour));
        }

        // A ring only becomes sampleable once the whole ring is coloured.
        for (x, y, colour) in filled {
            img.put_pixel(x, y, colour);
            sampled.insert(x, y);
        }

        frontier = next;
    }
}

//! Drawing primitives and the menu / playfield / game-over screens.

use crate::game::game::{GRID_HEIGHT, GRID_WIDTH, Game, Mode, Point};

/// Side of one grid cell in pixels.
pub const CELL_SIZE: usize = 20;
/// Window width: 30 cells × 20 px.
pub const SCREEN_WIDTH: usize = GRID_WIDTH as usize * CELL_SIZE;
/// Window height: 20 cells × 20 px.
pub const SCREEN_HEIGHT: usize = GRID_HEIGHT as usize * CELL_SIZE;

const fn rgb(r: u32, g: u32, b: u32) -> u32 {
    (r << 16) | (g << 8) | b
}

const BACKGROUND: u32 = rgb(20, 20, 30);
const SNAKE_BODY: u32 = rgb(0, 150, 50);
const SNAKE_CORE: u32 = rgb(0, 255, 100);
const FOOD: u32 = rgb(255, 0, 0);
const TITLE: u32 = rgb(0, 255, 128);
const PROMPT: u32 = rgb(255, 255, 0);
const FOOTER: u32 = rgb(150, 150, 150);
const LOSE: u32 = rgb(255, 0, 0);
const TEXT: u32 = rgb(255, 255, 255);

/// Glyph advance in font units (5 columns plus 1 of spacing).
const GLYPH_ADVANCE: usize = 6;

/// Owns the pixel buffer the window presents each frame.
pub struct Renderer {
    /// 600×400 framebuffer (0xRRGGBB per pixel). Row-major, left-to-right,
    /// top-to-bottom.
    pub framebuffer: Vec<u32>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            framebuffer: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    /// Redraw the whole frame for the current mode.
    pub fn draw(&mut self, game: &Game) {
        self.clear(BACKGROUND);
        match game.mode {
            Mode::Menu => self.draw_menu(),
            Mode::Playing => self.draw_game(game),
            Mode::GameOver => self.draw_game_over(game),
        }
    }

    fn draw_menu(&mut self) {
        self.draw_text_centered("#! ULTRA SNAKE 20XX", 140, 4, TITLE);
        self.draw_text_centered("CLICK OR PRESS ANY KEY TO START", 220, 2, PROMPT);
        self.draw_text_centered("20XX [C] - TEAM FLAMES", 360, 2, FOOTER);
    }

    fn draw_game(&mut self, game: &Game) {
        for &cell in &game.snake {
            // Filled cell with a 2 px inset highlight for a border effect.
            self.fill_cell(cell, 0, SNAKE_BODY);
            self.fill_cell(cell, 2, SNAKE_CORE);
        }
        self.fill_cell(game.food, 0, FOOD);
        self.draw_text(&format!("SCORE: {}", game.score), 10, 10, 2, TEXT);
    }

    fn draw_game_over(&mut self, game: &Game) {
        self.draw_text_centered("YOU LOSE", 140, 4, LOSE);
        self.draw_text_centered(&format!("FINAL SCORE: {}", game.score), 220, 2, TEXT);
        self.draw_text_centered("RESTART? (Y/N)", 280, 2, PROMPT);
    }

    fn clear(&mut self, color: u32) {
        self.framebuffer.fill(color);
    }

    /// Fill one grid cell, shrunk by `inset` pixels on every side.
    fn fill_cell(&mut self, cell: Point, inset: usize, color: u32) {
        self.fill_rect(
            cell.x as usize * CELL_SIZE + inset,
            cell.y as usize * CELL_SIZE + inset,
            CELL_SIZE - 2 * inset,
            CELL_SIZE - 2 * inset,
            color,
        );
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(SCREEN_HEIGHT) {
            for col in x..(x + w).min(SCREEN_WIDTH) {
                self.framebuffer[row * SCREEN_WIDTH + col] = color;
            }
        }
    }

    /// Pixel width of a string at the given scale.
    fn text_width(text: &str, scale: usize) -> usize {
        text.chars().count() * GLYPH_ADVANCE * scale
    }

    fn draw_text_centered(&mut self, text: &str, y: usize, scale: usize, color: u32) {
        let x = (SCREEN_WIDTH - Self::text_width(text, scale)) / 2;
        self.draw_text(text, x, y, scale, color);
    }

    /// Draw a string from the 5×7 glyph table, each font pixel scaled to a
    /// `scale`×`scale` block. Lowercase is folded to uppercase; characters
    /// without a glyph advance without drawing.
    fn draw_text(&mut self, text: &str, x: usize, y: usize, scale: usize, color: u32) {
        let mut pen_x = x;
        for ch in text.chars() {
            if let Some(rows) = glyph(ch.to_ascii_uppercase()) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..5 {
                        if bits & (0x10 >> col) != 0 {
                            self.fill_rect(
                                pen_x + col * scale,
                                y + row * scale,
                                scale,
                                scale,
                                color,
                            );
                        }
                    }
                }
            }
            pen_x += GLYPH_ADVANCE * scale;
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// 5×7 glyph rows, bit 4 = leftmost column. Covers what the three screens
/// print: uppercase letters, digits, and a little punctuation.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x01, 0x01, 0x01, 0x01, 0x11, 0x11, 0x0E],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1E, 0x01, 0x01, 0x0E, 0x01, 0x01, 0x1E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ':' => [0x00, 0x04, 0x00, 0x00, 0x00, 0x04, 0x00],
        '/' => [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '[' => [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E],
        ']' => [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E],
        _ => return None,
    };
    Some(rows)
}

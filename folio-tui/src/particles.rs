//! Floating star background.
//!
//! A handful of faint stars scattered over the page that bob up and down
//! and twinkle. Purely decorative; drawn underneath all content.

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::theme::{colors, dim};

/// Types of background animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ParticleMode {
    /// Sparse, slowly twinkling stars
    #[default]
    Stars,
    /// Denser and faster purple sparkles
    Sparkles,
    /// Static background
    None,
}

impl ParticleMode {
    /// Cycle to the next mode
    pub fn next(&self) -> Self {
        match self {
            ParticleMode::Stars => ParticleMode::Sparkles,
            ParticleMode::Sparkles => ParticleMode::None,
            ParticleMode::None => ParticleMode::Stars,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParticleMode::Stars => "Stars",
            ParticleMode::Sparkles => "Sparkles",
            ParticleMode::None => "None",
        }
    }

    /// How many particles the mode keeps alive
    fn population(&self) -> usize {
        match self {
            ParticleMode::Stars => 20,
            ParticleMode::Sparkles => 45,
            ParticleMode::None => 0,
        }
    }
}

/// A single star
#[derive(Debug, Clone)]
pub struct Particle {
    /// Column, as a fraction of the width (0.0..1.0)
    pub x: f32,
    /// Row, as a fraction of the height (0.0..1.0)
    pub y: f32,
    pub char: char,
    /// Frames per float cycle
    pub period: u32,
    /// Offset into the cycle so stars don't move in lockstep
    pub phase: u32,
    /// Peak brightness (0.0 - 1.0)
    pub peak: f32,
    /// Frames left to live
    pub ttl: u32,
}

impl Particle {
    pub fn new_star() -> Self {
        let mut rng = rand::thread_rng();
        let chars = ['·', '✦', '⋆', '✧', '·'];
        // 3s..7s at ~30 FPS
        let period = rng.gen_range(90..210);
        Self {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
            char: chars[rng.gen_range(0..chars.len())],
            period,
            phase: rng.gen_range(0..period),
            peak: rng.gen_range(0.15..0.35),
            ttl: period * rng.gen_range(2..5),
        }
    }

    pub fn new_sparkle() -> Self {
        let mut rng = rand::thread_rng();
        let chars = ['˚', '∘', '⁺', '✧', '·'];
        let period = rng.gen_range(30..90);
        Self {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
            char: chars[rng.gen_range(0..chars.len())],
            period,
            phase: rng.gen_range(0..period),
            peak: rng.gen_range(0.3..0.7),
            ttl: period * rng.gen_range(1..3),
        }
    }

    /// Position in the float cycle, 0.0..1.0
    fn cycle(&self, frame: u64) -> f32 {
        let t = (frame + self.phase as u64) % self.period as u64;
        t as f32 / self.period as f32
    }

    /// Vertical bob in rows (up to one row up and back)
    pub fn lift(&self, frame: u64) -> f32 {
        (self.cycle(frame) * std::f32::consts::TAU).sin().abs()
    }

    /// Twinkle brightness, never above the peak
    pub fn brightness(&self, frame: u64) -> f32 {
        let wave = 0.5 + 0.5 * (self.cycle(frame) * std::f32::consts::TAU).cos();
        self.peak * (0.3 + 0.7 * wave)
    }

    pub fn is_alive(&self) -> bool {
        self.ttl > 0
    }

    pub fn color(&self, mode: ParticleMode, frame: u64) -> Color {
        match mode {
            ParticleMode::Stars => dim(colors::STAR, self.brightness(frame)),
            ParticleMode::Sparkles => dim(colors::SPARKLE, self.brightness(frame)),
            ParticleMode::None => Color::Reset,
        }
    }
}

/// The particle system managing all stars
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    mode: ParticleMode,
    frame_count: u64,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(ParticleMode::Stars)
    }
}

impl ParticleSystem {
    pub fn new(mode: ParticleMode) -> Self {
        Self {
            particles: Vec::with_capacity(mode.population()),
            mode,
            frame_count: 0,
        }
    }

    /// Set the animation mode
    pub fn set_mode(&mut self, mode: ParticleMode) {
        if self.mode != mode {
            self.mode = mode;
            self.particles.clear();
        }
    }

    pub fn mode(&self) -> ParticleMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Age all particles and top the population back up
    pub fn update(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);

        for particle in &mut self.particles {
            particle.ttl = particle.ttl.saturating_sub(1);
        }
        self.particles.retain(Particle::is_alive);

        // Stars appear gradually rather than all at once
        if self.frame_count.is_multiple_of(4) && self.particles.len() < self.mode.population() {
            let particle = match self.mode {
                ParticleMode::Stars => Particle::new_star(),
                ParticleMode::Sparkles => Particle::new_sparkle(),
                ParticleMode::None => return,
            };
            self.particles.push(particle);
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if self.mode == ParticleMode::None || area.width == 0 || area.height == 0 {
            return;
        }

        for particle in &self.particles {
            let x = (particle.x * area.width as f32) as u16;
            let y = (particle.y * area.height as f32 - particle.lift(self.frame_count)).max(0.0) as u16;

            if x < area.width && y < area.height {
                let pos = (area.x + x, area.y + y);
                let color = particle.color(self.mode, self.frame_count);
                buf[pos].set_char(particle.char);
                buf[pos].set_style(Style::default().fg(color));
            }
        }
    }
}

/// Widget wrapper for the particle system
pub struct ParticleWidget<'a> {
    system: &'a ParticleSystem,
}

impl<'a> ParticleWidget<'a> {
    pub fn new(system: &'a ParticleSystem) -> Self {
        Self { system }
    }
}

impl Widget for ParticleWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.system.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_is_capped() {
        let mut system = ParticleSystem::new(ParticleMode::Stars);
        for _ in 0..1_000 {
            system.update();
            assert!(system.len() <= 20);
        }
        assert!(system.len() > 0);
    }

    #[test]
    fn test_none_mode_spawns_nothing() {
        let mut system = ParticleSystem::new(ParticleMode::None);
        for _ in 0..100 {
            system.update();
        }
        assert_eq!(system.len(), 0);
    }

    #[test]
    fn test_mode_change_clears_particles() {
        let mut system = ParticleSystem::new(ParticleMode::Sparkles);
        for _ in 0..40 {
            system.update();
        }
        system.toggle_mode();
        assert_eq!(system.mode(), ParticleMode::None);
        assert_eq!(system.len(), 0);
    }

    #[test]
    fn test_brightness_stays_under_peak() {
        let star = Particle::new_star();
        for frame in 0..500 {
            let b = star.brightness(frame);
            assert!(b >= 0.0 && b <= star.peak + f32::EPSILON);
            assert!(star.lift(frame) <= 1.0);
        }
    }

    #[test]
    fn test_render_stays_inside_area() {
        let mut system = ParticleSystem::new(ParticleMode::Sparkles);
        for _ in 0..200 {
            system.update();
        }
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        system.render(area, &mut buf);
    }
}

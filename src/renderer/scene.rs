//! Per-phase scene composition
//!
//! One sprite per visible entity and one text command per line, derived
//! entirely from the session state after the tick.

use glam::Vec2;

use crate::audio::{MusicTrack, SoundEffect};
use crate::sim::{GameEvent, Phase, Session, TickOutcome};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const OFF_WHITE: Color = Color::rgb(245, 245, 245);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const GREEN: Color = Color::rgb(0, 228, 48);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Textures the platform is expected to have loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureId {
    Background,
    Player,
    Monster,
    HealthPickup,
}

impl TextureId {
    pub const ALL: [TextureId; 4] = [
        TextureId::Background,
        TextureId::Player,
        TextureId::Monster,
        TextureId::HealthPickup,
    ];

    pub fn asset_path(&self) -> &'static str {
        match self {
            TextureId::Background => "resources/background.png",
            TextureId::Player => "resources/player.png",
            TextureId::Monster => "resources/monster.png",
            TextureId::HealthPickup => "resources/health.png",
        }
    }
}

/// How a text position is interpreted horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `pos` is the left edge
    Left,
    /// `pos.x` is the center line; the platform measures the string
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        texture: TextureId,
        pos: Vec2,
        tint: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: u16,
        color: Color,
        align: TextAlign,
    },
}

/// Everything the platform needs to present one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub clear_color: Color,
    /// Drawn in order, back to front
    pub commands: Vec<DrawCommand>,
    /// One-shot effects to start this frame
    pub sounds: Vec<SoundEffect>,
    /// Stream to keep playing
    pub music: Option<MusicTrack>,
    /// Shut down after presenting this frame
    pub exit_requested: bool,
}

impl RenderRequest {
    fn new(outcome: &TickOutcome) -> Self {
        Self {
            clear_color: Color::OFF_WHITE,
            commands: Vec::new(),
            sounds: sounds_for(&outcome.events),
            music: Some(MusicTrack::Background),
            exit_requested: outcome.exit_requested,
        }
    }

    fn sprite(&mut self, texture: TextureId, pos: Vec2, tint: Color) {
        self.commands.push(DrawCommand::Sprite { texture, pos, tint });
    }

    fn text(&mut self, text: impl Into<String>, pos: Vec2, size: u16, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            size,
            color,
            align: TextAlign::Left,
        });
    }

    fn centered(
        &mut self,
        text: impl Into<String>,
        center_x: f32,
        y: f32,
        size: u16,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos: Vec2::new(center_x, y),
            size,
            color,
            align: TextAlign::Center,
        });
    }

    /// Text of every text command, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Sprite { .. } => None,
        })
    }

    /// Sprite commands for one texture
    pub fn sprites(&self, texture: TextureId) -> impl Iterator<Item = (Vec2, Color)> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Sprite { texture: t, pos, tint } if *t == texture => Some((*pos, *tint)),
            _ => None,
        })
    }
}

fn sounds_for(events: &[GameEvent]) -> Vec<SoundEffect> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::PlayerAttacked { .. } => Some(SoundEffect::Attack),
            _ => None,
        })
        .collect()
}

/// Build the render request for the session's current phase
pub fn compose(session: &Session, outcome: &TickOutcome) -> RenderRequest {
    let mut req = RenderRequest::new(outcome);
    let center_x = session.tuning.arena.x / 2.0;
    let mid_y = session.tuning.arena.y / 2.0;

    req.sprite(TextureId::Background, Vec2::ZERO, Color::WHITE);

    match session.phase {
        Phase::Menu => {
            req.centered("Battle with Monster", center_x, 200.0, 40, Color::BLACK);
            req.centered("Press ENTER to Start", center_x, 300.0, 30, Color::BLACK);
            req.centered("Press ESC to Exit", center_x, 350.0, 30, Color::BLACK);
        }
        Phase::Playing => {
            let tint = if session.player.attack_flash > 0.0 {
                Color::RED
            } else {
                Color::WHITE
            };
            entities(&mut req, session, tint);

            req.text(
                format!("Player Health: {}", session.player.health),
                Vec2::new(20.0, 20.0),
                20,
                Color::RED,
            );
            req.text(
                format!("Monster Health: {}", session.monster.health),
                Vec2::new(20.0, 50.0),
                20,
                Color::GREEN,
            );
            req.text(
                format!("Score: {}", session.score),
                Vec2::new(20.0, 80.0),
                20,
                Color::BLACK,
            );
        }
        Phase::Paused => {
            entities(&mut req, session, Color::WHITE);
            req.centered("PAUSED", center_x, mid_y, 50, Color::BLACK);
            req.centered("Press P to Resume", center_x, mid_y + 60.0, 30, Color::BLACK);
            req.centered("Press ESC to Menu", center_x, mid_y + 100.0, 30, Color::BLACK);
        }
        Phase::GameOver => {
            req.centered("GAME OVER", center_x, mid_y, 50, Color::RED);
            req.centered(
                format!("Final Score: {}", session.score),
                center_x,
                mid_y + 60.0,
                30,
                Color::BLACK,
            );
            req.centered("Press ENTER to Restart", center_x, mid_y + 100.0, 30, Color::BLACK);
        }
    }

    req
}

fn entities(req: &mut RenderRequest, session: &Session, player_tint: Color) {
    req.sprite(TextureId::Player, session.player.position, player_tint);
    if session.monster.alive {
        req.sprite(TextureId::Monster, session.monster.position, Color::WHITE);
    }
    if session.pickup.active {
        req.sprite(TextureId::HealthPickup, session.pickup.position, Color::WHITE);
    }
}

//! Screen view models
//!
//! Each screen resolves tokens and sample content into a serializable
//! description the host renderer can draw. The four tab screens own an
//! [`AutoHideScrollHandler`] wired to the shared visibility controller, so
//! scrolling any of them hides or reveals the one tab bar. The tokens
//! preview screen does not auto-hide; it exists to display the registry and
//! the renderer's output.

use std::sync::Arc;

use app_core::{
    sample_cafe_shots, sample_notices, sample_quick_actions, sample_suggested_pins,
    sample_timeline_cards, ProfileSnapshot,
};
use app_state::tab_bar::{AutoHideScrollHandler, ScrollEvent, TabBarVisibility};
use serde::{Deserialize, Serialize};

use crate::design_system::DesignSystem;
use crate::render::{render_border_token, render_motion_token, render_token_value, TokenValue};
use crate::tokens::{
    BorderTokenName, ColorTokenName, MotionTokenName, ShadowToken, ShadowTokenName,
    SpacingTokenName, TypographyTokenName,
};
use crate::typography::ResolvedTextStyle;

// =============================================================================
// Shared Pieces
// =============================================================================

/// A two-stop background gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    /// Stop colors, top to bottom
    pub colors: [String; 2],
    /// Stop locations in `[0, 1]`
    pub locations: [f32; 2],
}

/// A line of styled text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Text content
    pub text: String,
    /// Resolved style
    pub style: ResolvedTextStyle,
}

/// Card surface styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSurface {
    /// Background color literal
    pub background: String,
    /// Corner radius in pixels
    pub corner_radius: f32,
    /// Border width in pixels
    pub border_width: f32,
    /// Border color literal
    pub border_color: String,
    /// Inner padding in pixels
    pub padding: f32,
    /// Gap between children in pixels
    pub gap: f32,
    /// Drop shadow, if the card floats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowToken>,
}

/// Scroll container padding; the host adds the device top inset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPadding {
    /// Padding above content, added to the safe-area top inset
    pub top_extra: f32,
    /// Padding below content
    pub bottom: f32,
    /// Horizontal padding
    pub horizontal: f32,
    /// Gap between sections
    pub gap: f32,
}

/// A small pill chip (tags, call-to-action links)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chip {
    /// Chip label
    pub label: TextLine,
    /// Background color; transparent chips leave it empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Border width
    pub border_width: f32,
    /// Border color
    pub border_color: String,
    /// Corner radius
    pub corner_radius: f32,
}

// =============================================================================
// Timeline Screen
// =============================================================================

/// A rendered timeline post card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineCardView {
    /// Card surface
    pub surface: CardSurface,
    /// Post title
    pub title: TextLine,
    /// Post location
    pub location: TextLine,
    /// Post caption
    pub caption: TextLine,
    /// Hashtag chips
    pub tags: Vec<Chip>,
}

/// A rendered cafe gallery card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeShotView {
    /// Card surface (softened shadow relative to post cards)
    pub surface: CardSurface,
    /// Remote image location
    pub image_url: String,
    /// Image aspect ratio (width / height)
    pub image_aspect_ratio: f32,
    /// Image corner radius
    pub image_corner_radius: f32,
    /// Placeholder color while the image loads
    pub image_placeholder: String,
    /// Shot title
    pub title: TextLine,
    /// Shot location
    pub location: TextLine,
    /// Shot caption
    pub description: TextLine,
}

/// Timeline screen content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineModel {
    /// Background gradient
    pub gradient: GradientSpec,
    /// Scroll container padding
    pub padding: ContentPadding,
    /// Hero headline
    pub header_title: TextLine,
    /// Header body copy
    pub header_body: TextLine,
    /// Post cards
    pub cards: Vec<TimelineCardView>,
    /// Gallery section title
    pub gallery_title: TextLine,
    /// Gallery section copy
    pub gallery_body: TextLine,
    /// Gallery cards
    pub shots: Vec<CafeShotView>,
}

/// The timeline (home) screen
#[derive(Debug)]
pub struct TimelineScreen {
    model: TimelineModel,
    scroll: AutoHideScrollHandler,
}

impl TimelineScreen {
    /// Build the screen over the shared design system and controller
    pub fn new(design: &DesignSystem, visibility: Arc<TabBarVisibility>) -> Self {
        let tokens = design.tokens();
        let border = tokens.border(BorderTokenName::Hairline);
        let border_color = tokens.color(border.color).to_string();
        let shadow = tokens.shadow(ShadowTokenName::Soft);

        let cards = sample_timeline_cards()
            .into_iter()
            .map(|card| TimelineCardView {
                surface: CardSurface {
                    background: tokens.color(ColorTokenName::SurfaceGlass).to_string(),
                    corner_radius: 28.0,
                    border_width: border.width,
                    border_color: border_color.clone(),
                    padding: tokens.spacing(SpacingTokenName::Space24),
                    gap: tokens.spacing(SpacingTokenName::Space12),
                    shadow: Some(shadow.clone()),
                },
                title: text_line(design, TypographyTokenName::Title, &card.title),
                location: text_line(design, TypographyTokenName::Footnote, &card.location),
                caption: text_line(design, TypographyTokenName::Body, &card.caption),
                tags: card
                    .tags
                    .iter()
                    .map(|tag| Chip {
                        label: accent_line(design, TypographyTokenName::Footnote, format!("#{tag}")),
                        background: Some(
                            tokens.color(ColorTokenName::SurfaceElevated).to_string(),
                        ),
                        border_width: border.width,
                        border_color: border_color.clone(),
                        corner_radius: 999.0,
                    })
                    .collect(),
            })
            .collect();

        // Gallery cards float on a gentler shadow than the post cards.
        let gallery_shadow = ShadowToken {
            color: shadow.color.clone(),
            offset: crate::tokens::ShadowOffset {
                width: shadow.offset.width,
                height: shadow.offset.height / 2.0,
            },
            radius: shadow.radius * 0.8,
            opacity: shadow.opacity * 0.7,
            elevation: shadow.elevation,
        };

        let shots = sample_cafe_shots()
            .into_iter()
            .map(|shot| CafeShotView {
                surface: CardSurface {
                    background: tokens.color(ColorTokenName::SurfaceGlass).to_string(),
                    corner_radius: 32.0,
                    border_width: border.width,
                    border_color: border_color.clone(),
                    padding: tokens.spacing(SpacingTokenName::Space16),
                    gap: tokens.spacing(SpacingTokenName::Space12),
                    shadow: Some(gallery_shadow.clone()),
                },
                image_url: shot.image_url,
                image_aspect_ratio: 4.0 / 3.0,
                image_corner_radius: 24.0,
                image_placeholder: tokens.color(ColorTokenName::SurfaceElevated).to_string(),
                title: text_line(design, TypographyTokenName::Title, &shot.title),
                location: text_line(design, TypographyTokenName::Footnote, &shot.location),
                description: text_line(design, TypographyTokenName::Body, &shot.description),
            })
            .collect();

        let model = TimelineModel {
            gradient: GradientSpec {
                colors: [
                    "rgba(202, 224, 255, 0.45)".to_string(),
                    tokens.color(ColorTokenName::SurfaceBase).to_string(),
                ],
                locations: [0.0, 1.0],
            },
            padding: ContentPadding {
                top_extra: tokens.spacing(SpacingTokenName::Space32),
                bottom: tokens.spacing(SpacingTokenName::Space32),
                horizontal: tokens.spacing(SpacingTokenName::Space24),
                gap: tokens.spacing(SpacingTokenName::Space24),
            },
            header_title: text_line(design, TypographyTokenName::Hero, "今日のハイライト"),
            header_body: text_line(
                design,
                TypographyTokenName::Body,
                "タイムラインで最近の“小さな冒険”を振り返り、次の出かけ先のヒントを見つけましょう。",
            ),
            cards,
            gallery_title: text_line(design, TypographyTokenName::Title, "カフェフォトギャラリー"),
            gallery_body: text_line(
                design,
                TypographyTokenName::Body,
                "ブラーの質感を確かめるためのショットです。透明感のあるナビゲーションと一緒に、色味やシャドウの映り込みをチェックしてみてください。",
            ),
            shots,
        };

        TimelineScreen {
            model,
            scroll: AutoHideScrollHandler::new(visibility),
        }
    }

    /// Screen content
    pub fn model(&self) -> &TimelineModel {
        &self.model
    }

    /// Scroll callback from the host scroll view
    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        self.scroll.on_scroll(event);
    }

    /// Screen gained focus
    pub fn on_focus(&self) {
        self.scroll.on_focus();
    }

    /// Screen lost focus
    pub fn on_blur(&self) {
        self.scroll.on_blur();
    }
}

// =============================================================================
// Map Screen
// =============================================================================

/// A rendered map suggestion card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPinView {
    /// Card surface
    pub surface: CardSurface,
    /// Spot name
    pub name: TextLine,
    /// Area and travel estimate
    pub subtitle: TextLine,
    /// Suggestion note
    pub note: TextLine,
    /// "View on Map" call-to-action
    pub cta: Chip,
}

/// Map screen content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapModel {
    /// Background gradient
    pub gradient: GradientSpec,
    /// Scroll container padding
    pub padding: ContentPadding,
    /// Display headline
    pub header_title: TextLine,
    /// Header body copy
    pub header_body: TextLine,
    /// Suggestion cards
    pub pins: Vec<MapPinView>,
}

/// The map screen
#[derive(Debug)]
pub struct MapScreen {
    model: MapModel,
    scroll: AutoHideScrollHandler,
}

impl MapScreen {
    /// Build the screen over the shared design system and controller
    pub fn new(design: &DesignSystem, visibility: Arc<TabBarVisibility>) -> Self {
        let tokens = design.tokens();
        let border = tokens.border(BorderTokenName::Hairline);
        let border_color = tokens.color(border.color).to_string();

        let pins = sample_suggested_pins()
            .into_iter()
            .map(|pin| MapPinView {
                surface: CardSurface {
                    background: tokens.color(ColorTokenName::SurfaceGlass).to_string(),
                    corner_radius: 24.0,
                    border_width: border.width,
                    border_color: border_color.clone(),
                    padding: tokens.spacing(SpacingTokenName::Space24),
                    gap: tokens.spacing(SpacingTokenName::Space12),
                    shadow: None,
                },
                name: text_line(design, TypographyTokenName::Title, &pin.name),
                subtitle: text_line(design, TypographyTokenName::Footnote, pin.subtitle()),
                note: text_line(design, TypographyTokenName::Body, &pin.note),
                cta: Chip {
                    label: accent_line(design, TypographyTokenName::Footnote, "View on Map"),
                    background: None,
                    border_width: border.width,
                    border_color: border_color.clone(),
                    corner_radius: 18.0,
                },
            })
            .collect();

        let model = MapModel {
            gradient: GradientSpec {
                colors: [
                    tokens.color(ColorTokenName::SurfaceBase).to_string(),
                    "rgba(255, 255, 255, 0.96)".to_string(),
                ],
                locations: [0.0, 1.0],
            },
            padding: ContentPadding {
                top_extra: tokens.spacing(SpacingTokenName::Space32),
                bottom: tokens.spacing(SpacingTokenName::Space32),
                horizontal: tokens.spacing(SpacingTokenName::Space24),
                gap: tokens.spacing(SpacingTokenName::Space24),
            },
            header_title: text_line(design, TypographyTokenName::Display, "マップで次の目的地を探す"),
            header_body: text_line(
                design,
                TypographyTokenName::Body,
                "位置情報つきの投稿と連動し、近くのおすすめスポットが自動で現れます。距離と所要時間で直感的に判断できます。",
            ),
            pins,
        };

        MapScreen {
            model,
            scroll: AutoHideScrollHandler::new(visibility),
        }
    }

    /// Screen content
    pub fn model(&self) -> &MapModel {
        &self.model
    }

    /// Scroll callback from the host scroll view
    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        self.scroll.on_scroll(event);
    }

    /// Screen gained focus
    pub fn on_focus(&self) {
        self.scroll.on_focus();
    }

    /// Screen lost focus
    pub fn on_blur(&self) {
        self.scroll.on_blur();
    }
}

// =============================================================================
// Notifications Screen
// =============================================================================

/// A rendered notice card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeView {
    /// Card surface
    pub surface: CardSurface,
    /// Notice headline
    pub title: TextLine,
    /// Notice detail line
    pub detail: TextLine,
    /// Relative timestamp
    pub time_ago: TextLine,
}

/// Notifications screen content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsModel {
    /// Background gradient
    pub gradient: GradientSpec,
    /// Scroll container padding
    pub padding: ContentPadding,
    /// Display headline
    pub header_title: TextLine,
    /// Header body copy
    pub header_body: TextLine,
    /// Notice cards
    pub notices: Vec<NoticeView>,
}

/// The notifications screen
#[derive(Debug)]
pub struct NotificationsScreen {
    model: NotificationsModel,
    scroll: AutoHideScrollHandler,
}

impl NotificationsScreen {
    /// Build the screen over the shared design system and controller
    pub fn new(design: &DesignSystem, visibility: Arc<TabBarVisibility>) -> Self {
        let tokens = design.tokens();
        let border = tokens.border(BorderTokenName::Hairline);
        let border_color = tokens.color(border.color).to_string();

        let notices = sample_notices()
            .into_iter()
            .map(|notice| NoticeView {
                surface: CardSurface {
                    background: tokens.color(ColorTokenName::SurfaceElevated).to_string(),
                    corner_radius: 24.0,
                    border_width: border.width,
                    border_color: border_color.clone(),
                    padding: tokens.spacing(SpacingTokenName::Space16),
                    gap: tokens.spacing(SpacingTokenName::Space8),
                    shadow: None,
                },
                title: text_line(design, TypographyTokenName::Title, &notice.title),
                detail: text_line(design, TypographyTokenName::Body, &notice.detail),
                time_ago: text_line(design, TypographyTokenName::Footnote, &notice.time_ago),
            })
            .collect();

        let model = NotificationsModel {
            gradient: GradientSpec {
                colors: [
                    tokens.color(ColorTokenName::SurfaceBase).to_string(),
                    tokens.color(ColorTokenName::SurfaceGlass).to_string(),
                ],
                locations: [0.0, 1.0],
            },
            padding: ContentPadding {
                top_extra: tokens.spacing(SpacingTokenName::Space32),
                bottom: tokens.spacing(SpacingTokenName::Space24),
                horizontal: tokens.spacing(SpacingTokenName::Space24),
                gap: tokens.spacing(SpacingTokenName::Space16),
            },
            header_title: text_line(design, TypographyTokenName::Display, "最新の通知"),
            header_body: text_line(
                design,
                TypographyTokenName::Body,
                "タップすると詳細からタイムラインやマップに遷移できる想定です。フィードバックはリアルタイムに同期されます。",
            ),
            notices,
        };

        NotificationsScreen {
            model,
            scroll: AutoHideScrollHandler::new(visibility),
        }
    }

    /// Screen content
    pub fn model(&self) -> &NotificationsModel {
        &self.model
    }

    /// Scroll callback from the host scroll view
    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        self.scroll.on_scroll(event);
    }

    /// Screen gained focus
    pub fn on_focus(&self) {
        self.scroll.on_focus();
    }

    /// Screen lost focus
    pub fn on_blur(&self) {
        self.scroll.on_blur();
    }
}

// =============================================================================
// Account Screen
// =============================================================================

/// A rendered quick-action row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickActionView {
    /// Row surface
    pub surface: CardSurface,
    /// Row label
    pub label: TextLine,
    /// Helper line
    pub helper: TextLine,
}

/// Account screen content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountModel {
    /// Background gradient
    pub gradient: GradientSpec,
    /// Scroll container padding
    pub padding: ContentPadding,
    /// Display headline
    pub header_title: TextLine,
    /// Header body copy
    pub header_body: TextLine,
    /// Profile snapshot card
    pub snapshot_surface: CardSurface,
    /// Snapshot card title
    pub snapshot_title: TextLine,
    /// Snapshot card body
    pub snapshot_body: TextLine,
    /// Quick-action rows
    pub actions: Vec<QuickActionView>,
}

/// The account screen
#[derive(Debug)]
pub struct AccountScreen {
    model: AccountModel,
    scroll: AutoHideScrollHandler,
}

impl AccountScreen {
    /// Build the screen over the shared design system and controller
    pub fn new(design: &DesignSystem, visibility: Arc<TabBarVisibility>) -> Self {
        let tokens = design.tokens();
        let border = tokens.border(BorderTokenName::Hairline);
        let border_color = tokens.color(border.color).to_string();
        let snapshot = ProfileSnapshot::default();

        let actions = sample_quick_actions()
            .into_iter()
            .map(|action| QuickActionView {
                surface: CardSurface {
                    background: tokens.color(ColorTokenName::SurfaceElevated).to_string(),
                    corner_radius: 24.0,
                    border_width: border.width,
                    border_color: border_color.clone(),
                    padding: tokens.spacing(SpacingTokenName::Space16),
                    gap: tokens.spacing(SpacingTokenName::Space4),
                    shadow: None,
                },
                label: text_line(design, TypographyTokenName::Body, &action.label)
                    .with_color(tokens.color(ColorTokenName::TextTitle)),
                helper: text_line(design, TypographyTokenName::Footnote, &action.helper),
            })
            .collect();

        let model = AccountModel {
            gradient: GradientSpec {
                colors: [
                    "rgba(202, 224, 255, 0.3)".to_string(),
                    tokens.color(ColorTokenName::SurfaceBase).to_string(),
                ],
                locations: [0.0, 1.0],
            },
            padding: ContentPadding {
                top_extra: tokens.spacing(SpacingTokenName::Space32),
                bottom: tokens.spacing(SpacingTokenName::Space32),
                horizontal: tokens.spacing(SpacingTokenName::Space24),
                gap: tokens.spacing(SpacingTokenName::Space24),
            },
            header_title: text_line(design, TypographyTokenName::Display, "アカウントと設定"),
            header_body: text_line(
                design,
                TypographyTokenName::Body,
                "プロフィールの調整や通知の好み、接続サービスをここから管理します。モバイルとWebの設定を共通化します。",
            ),
            snapshot_surface: CardSurface {
                background: tokens.color(ColorTokenName::SurfaceGlass).to_string(),
                corner_radius: 28.0,
                border_width: border.width,
                border_color,
                padding: tokens.spacing(SpacingTokenName::Space24),
                gap: tokens.spacing(SpacingTokenName::Space16),
                shadow: None,
            },
            snapshot_title: text_line(design, TypographyTokenName::Title, &snapshot.title),
            snapshot_body: text_line(design, TypographyTokenName::Body, &snapshot.body),
            actions,
        };

        AccountScreen {
            model,
            scroll: AutoHideScrollHandler::new(visibility),
        }
    }

    /// Screen content
    pub fn model(&self) -> &AccountModel {
        &self.model
    }

    /// Scroll callback from the host scroll view
    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        self.scroll.on_scroll(event);
    }

    /// Screen gained focus
    pub fn on_focus(&self) {
        self.scroll.on_focus();
    }

    /// Screen lost focus
    pub fn on_blur(&self) {
        self.scroll.on_blur();
    }
}

// =============================================================================
// Tokens Preview Screen
// =============================================================================

/// A color swatch row on the preview screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRow {
    /// Color token name
    pub name: ColorTokenName,
    /// Swatch fill
    pub swatch_color: String,
    /// Whether the swatch needs an outline (surface colors vanish otherwise)
    pub outlined: bool,
    /// Row label (the token name)
    pub label: TextLine,
    /// Rendered value string
    pub value: TextLine,
}

/// A spacing bar row on the preview screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingRow {
    /// Spacing token name
    pub name: SpacingTokenName,
    /// Bar width in pixels (the spacing value itself)
    pub bar_width: f32,
    /// Bar fill color
    pub bar_color: String,
    /// Row label (the token name)
    pub label: TextLine,
    /// Rendered value string
    pub value: TextLine,
}

/// The animated reveal card at the top of the preview screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRevealCard {
    /// Card surface
    pub surface: CardSurface,
    /// Hero line
    pub hero: TextLine,
    /// Display line
    pub display: TextLine,
    /// Body copy
    pub body: TextLine,
    /// Footnote describing the reveal animation
    pub footnote: TextLine,
    /// Label next to the pulsing dot
    pub micro_label: TextLine,
    /// Pulsing dot fill
    pub micro_dot_color: String,
    /// Motion token driving the card reveal
    pub reveal_motion: MotionTokenName,
    /// Motion token driving the dot pulse
    pub pulse_motion: MotionTokenName,
}

/// Tokens preview screen content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensPreviewModel {
    /// Background gradient
    pub gradient: GradientSpec,
    /// Scroll container padding
    pub padding: ContentPadding,
    /// Animated reveal card
    pub reveal_card: PreviewRevealCard,
    /// Section surface shared by the three listing sections
    pub section_surface: CardSurface,
    /// "Colors" section title
    pub colors_title: TextLine,
    /// Color rows
    pub color_rows: Vec<ColorRow>,
    /// "Spacing" section title
    pub spacing_title: TextLine,
    /// Spacing rows
    pub spacing_rows: Vec<SpacingRow>,
    /// "Motion & Surface" section title
    pub motion_title: TextLine,
    /// Rendered motion and border lines
    pub motion_lines: Vec<TextLine>,
}

/// Color tokens listed on the preview screen, in display order
const PREVIEW_COLOR_KEYS: [ColorTokenName; 9] = [
    ColorTokenName::TextTitle,
    ColorTokenName::TextBody,
    ColorTokenName::TextFoot,
    ColorTokenName::AccentPrimary,
    ColorTokenName::AccentMuted,
    ColorTokenName::SurfaceBase,
    ColorTokenName::SurfaceGlass,
    ColorTokenName::SurfaceElevated,
    ColorTokenName::BorderHairline,
];

/// Spacing tokens listed on the preview screen, in display order
const PREVIEW_SPACING_KEYS: [SpacingTokenName; 5] = [
    SpacingTokenName::Space4,
    SpacingTokenName::Space8,
    SpacingTokenName::Space16,
    SpacingTokenName::Space24,
    SpacingTokenName::Space32,
];

/// The design-token preview screen (no scroll auto-hide)
#[derive(Debug, Clone, PartialEq)]
pub struct TokensPreviewScreen {
    model: TokensPreviewModel,
}

impl TokensPreviewScreen {
    /// Build the screen over the shared design system
    pub fn new(design: &DesignSystem) -> Self {
        let tokens = design.tokens();
        let border = tokens.border(BorderTokenName::Hairline);
        let border_color = tokens.color(border.color).to_string();
        let shadow = tokens.shadow(ShadowTokenName::Soft);

        let color_rows = PREVIEW_COLOR_KEYS
            .iter()
            .map(|name| {
                let value = tokens.color(*name).to_string();
                ColorRow {
                    name: *name,
                    swatch_color: value.clone(),
                    outlined: name.is_surface(),
                    label: text_line(design, TypographyTokenName::Body, name.as_str()),
                    value: text_line(
                        design,
                        TypographyTokenName::Footnote,
                        render_token_value(&TokenValue::Text(value)),
                    ),
                }
            })
            .collect();

        let spacing_rows = PREVIEW_SPACING_KEYS
            .iter()
            .map(|name| {
                let pixels = tokens.spacing(*name);
                SpacingRow {
                    name: *name,
                    bar_width: pixels,
                    bar_color: tokens.color(ColorTokenName::AccentMuted).to_string(),
                    label: text_line(design, TypographyTokenName::Body, name.as_str()),
                    value: text_line(
                        design,
                        TypographyTokenName::Footnote,
                        render_token_value(&TokenValue::Number(pixels)),
                    ),
                }
            })
            .collect();

        let motion_lines = vec![
            text_line(
                design,
                TypographyTokenName::Footnote,
                render_motion_token(
                    tokens.motion(MotionTokenName::Content),
                    MotionTokenName::Content,
                ),
            ),
            text_line(
                design,
                TypographyTokenName::Footnote,
                render_motion_token(
                    tokens.motion(MotionTokenName::Micro),
                    MotionTokenName::Micro,
                ),
            ),
            text_line(
                design,
                TypographyTokenName::Footnote,
                render_border_token(border, BorderTokenName::Hairline, Some(&tokens.colors)),
            ),
        ];

        let model = TokensPreviewModel {
            gradient: GradientSpec {
                colors: [
                    "rgba(202, 224, 255, 0.45)".to_string(),
                    "rgba(255, 255, 255, 0.96)".to_string(),
                ],
                locations: [0.0, 1.0],
            },
            padding: ContentPadding {
                top_extra: tokens.spacing(SpacingTokenName::Space32),
                bottom: tokens.spacing(SpacingTokenName::Space32),
                horizontal: tokens.spacing(SpacingTokenName::Space24),
                gap: tokens.spacing(SpacingTokenName::Space24),
            },
            reveal_card: PreviewRevealCard {
                surface: CardSurface {
                    background: tokens.color(ColorTokenName::SurfaceGlass).to_string(),
                    corner_radius: 28.0,
                    border_width: border.width,
                    border_color: border_color.clone(),
                    padding: tokens.spacing(SpacingTokenName::Space24),
                    gap: 12.0,
                    shadow: Some(shadow.clone()),
                },
                hero: text_line(design, TypographyTokenName::Hero, "小さな冒険を、"),
                display: text_line(design, TypographyTokenName::Display, "透明感のある UI で残そう"),
                body: text_line(
                    design,
                    TypographyTokenName::Body,
                    "Rovrov のデザイントークンは、ミニマルで未来的な体験を実装するための共通言語です。タイポ、カラー、余白、モーションすべてをこのカードで確認できます。",
                ),
                footnote: text_line(
                    design,
                    TypographyTokenName::Footnote,
                    "motion-content を使用して、このカード全体が穏やかにフェードインしています。",
                ),
                micro_label: text_line(design, TypographyTokenName::Body, "motion-micro サンプル"),
                micro_dot_color: tokens.color(ColorTokenName::AccentPrimary).to_string(),
                reveal_motion: MotionTokenName::Content,
                pulse_motion: MotionTokenName::Micro,
            },
            section_surface: CardSurface {
                background: "rgba(255, 255, 255, 0.64)".to_string(),
                corner_radius: 24.0,
                border_width: border.width,
                border_color,
                padding: tokens.spacing(SpacingTokenName::Space24),
                gap: tokens.spacing(SpacingTokenName::Space12),
                shadow: None,
            },
            colors_title: text_line(design, TypographyTokenName::Title, "Colors"),
            color_rows,
            spacing_title: text_line(design, TypographyTokenName::Title, "Spacing"),
            spacing_rows,
            motion_title: text_line(design, TypographyTokenName::Title, "Motion & Surface"),
            motion_lines,
        };

        TokensPreviewScreen { model }
    }

    /// Screen content
    pub fn model(&self) -> &TokensPreviewModel {
        &self.model
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn text_line(
    design: &DesignSystem,
    name: TypographyTokenName,
    text: impl Into<String>,
) -> TextLine {
    TextLine {
        text: text.into(),
        style: design.tokens().text_style(name),
    }
}

/// A text line recolored with the primary accent
fn accent_line(
    design: &DesignSystem,
    name: TypographyTokenName,
    text: impl Into<String>,
) -> TextLine {
    let tokens = design.tokens();
    TextLine {
        text: text.into(),
        style: tokens
            .text_style(name)
            .with_color(tokens.color(ColorTokenName::AccentPrimary)),
    }
}

impl TextLine {
    /// Same line with a different literal color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.style = self.style.with_color(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::tab_bar::TabBarState;

    fn setup() -> (DesignSystem, Arc<TabBarVisibility>) {
        (DesignSystem::new(), Arc::new(TabBarVisibility::new()))
    }

    #[test]
    fn test_timeline_content() {
        let (design, visibility) = setup();
        let screen = TimelineScreen::new(&design, visibility);
        let model = screen.model();

        assert_eq!(model.header_title.text, "今日のハイライト");
        assert_eq!(model.header_title.style.font_size, 48.0);
        assert_eq!(model.cards.len(), 2);
        assert_eq!(model.shots.len(), 3);

        // Tag chips carry the accent color on a footnote face.
        let chip = &model.cards[0].tags[0];
        assert_eq!(chip.label.text, "#coffee");
        assert_eq!(chip.label.style.color, "#0D55FF");
        assert_eq!(chip.corner_radius, 999.0);
    }

    #[test]
    fn test_timeline_gallery_softens_shadow() {
        let (design, visibility) = setup();
        let screen = TimelineScreen::new(&design, visibility);

        let card_shadow = screen.model().cards[0].surface.shadow.as_ref().unwrap();
        let shot_shadow = screen.model().shots[0].surface.shadow.as_ref().unwrap();

        assert_eq!(shot_shadow.offset.height, card_shadow.offset.height / 2.0);
        assert!((shot_shadow.opacity - card_shadow.opacity * 0.7).abs() < 1e-6);
        assert!((shot_shadow.radius - card_shadow.radius * 0.8).abs() < 1e-6);
        assert_eq!(shot_shadow.elevation, card_shadow.elevation);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeline_scroll_drives_shared_bar() {
        let (design, visibility) = setup();
        let mut screen = TimelineScreen::new(&design, Arc::clone(&visibility));

        screen.on_scroll(&ScrollEvent::with_offset_y(80.0));
        assert_eq!(visibility.state(), TabBarState::Hidden);

        screen.on_blur();
        assert_eq!(visibility.state(), TabBarState::Shown);
    }

    #[test]
    fn test_map_content() {
        let (design, visibility) = setup();
        let screen = MapScreen::new(&design, visibility);
        let model = screen.model();

        assert_eq!(model.header_title.text, "マップで次の目的地を探す");
        assert_eq!(model.header_title.style.font_size, 32.0);
        assert_eq!(model.pins.len(), 2);
        assert_eq!(
            model.pins[0].subtitle.text,
            "Enoshima, Kanagawa ・ 38 min drive"
        );
        assert_eq!(model.pins[0].cta.label.text, "View on Map");
        assert!(model.pins[0].cta.background.is_none());
    }

    #[test]
    fn test_notifications_content() {
        let (design, visibility) = setup();
        let screen = NotificationsScreen::new(&design, visibility);
        let model = screen.model();

        assert_eq!(model.header_title.text, "最新の通知");
        assert_eq!(model.notices.len(), 3);
        assert_eq!(model.notices[0].time_ago.text, "3m ago");
        assert_eq!(
            model.notices[0].surface.background,
            "rgba(255, 255, 255, 0.84)"
        );
    }

    #[test]
    fn test_account_content() {
        let (design, visibility) = setup();
        let screen = AccountScreen::new(&design, visibility);
        let model = screen.model();

        assert_eq!(model.header_title.text, "アカウントと設定");
        assert_eq!(model.snapshot_title.text, "Profile snapshot");
        assert_eq!(model.actions.len(), 3);

        // Action labels use the body face with the title color.
        assert_eq!(model.actions[0].label.style.color, "#3A3A3A");
        assert_eq!(model.actions[0].label.style.font_size, 16.0);
    }

    #[test]
    fn test_preview_rows() {
        let design = DesignSystem::new();
        let screen = TokensPreviewScreen::new(&design);
        let model = screen.model();

        assert_eq!(model.color_rows.len(), 9);
        assert_eq!(model.spacing_rows.len(), 5);

        let title_row = &model.color_rows[0];
        assert_eq!(title_row.label.text, "color-text-title");
        assert_eq!(title_row.value.text, "#3A3A3A");
        assert!(!title_row.outlined);

        let glass_row = model
            .color_rows
            .iter()
            .find(|row| row.name == ColorTokenName::SurfaceGlass)
            .unwrap();
        assert!(glass_row.outlined);

        let space_row = &model.spacing_rows[3];
        assert_eq!(space_row.label.text, "space-24");
        assert_eq!(space_row.value.text, "24px");
        assert_eq!(space_row.bar_width, 24.0);
    }

    #[test]
    fn test_preview_motion_lines() {
        let design = DesignSystem::new();
        let screen = TokensPreviewScreen::new(&design);
        let lines: Vec<_> = screen
            .model()
            .motion_lines
            .iter()
            .map(|line| line.text.as_str())
            .collect();

        assert_eq!(
            lines,
            [
                "motion-content: 260ms • cubic-bezier(0, 0, 0.2, 1)",
                "motion-micro: 160ms • cubic-bezier(0.2, 0, 0.38, 0.9)",
                "border-0.3: 0.3px / rgba(15, 23, 42, 0.18)",
            ]
        );
    }

    #[test]
    fn test_preview_reveal_card_references_motion_tokens() {
        let design = DesignSystem::new();
        let screen = TokensPreviewScreen::new(&design);
        let card = &screen.model().reveal_card;

        assert_eq!(card.reveal_motion, MotionTokenName::Content);
        assert_eq!(card.pulse_motion, MotionTokenName::Micro);
        assert_eq!(card.hero.text, "小さな冒険を、");
        assert_eq!(card.micro_dot_color, "#0D55FF");
    }

    #[test]
    fn test_screens_share_one_controller() {
        let design = DesignSystem::new();
        let visibility = Arc::new(TabBarVisibility::new());

        let timeline = TimelineScreen::new(&design, Arc::clone(&visibility));
        let map = MapScreen::new(&design, Arc::clone(&visibility));

        assert!(Arc::ptr_eq(timeline.scroll.visibility(), &visibility));
        assert!(Arc::ptr_eq(map.scroll.visibility(), &visibility));
    }
}

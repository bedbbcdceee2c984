//! The built-in style functions.
//!
//! Each function is built once, on first use, and shared afterwards. Keys
//! are declared lowest precedence first: single-side shorthands, then axis
//! shorthands, then the long names, so `px` beats `pl` and `paddingLeft`
//! beats both.

use once_cell::sync::Lazy;

use super::function::{compose, StyleFn};
use super::spec::PropSpec;
use crate::scale::{FONT_SIZE_SCALE, SPACE_SCALE};
use crate::style::Unit;

/// Margin keys in precedence order.
pub const MARGIN_PROPS: &[&str] = &[
    "m",
    "margin",
    "mt",
    "mr",
    "mb",
    "ml",
    "mx",
    "my",
    "marginX",
    "marginY",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
];

/// Padding keys in precedence order.
pub const PADDING_PROPS: &[&str] = &[
    "p",
    "padding",
    "pt",
    "pr",
    "pb",
    "pl",
    "px",
    "py",
    "paddingX",
    "paddingY",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
];

fn length(prop: &str, category: &str) -> PropSpec {
    PropSpec::new(prop).scale(category).unit(Unit::Length)
}

fn scaled(prop: &str, category: &str) -> PropSpec {
    PropSpec::new(prop).scale(category)
}

fn plain(prop: &str) -> PropSpec {
    PropSpec::new(prop)
}

fn spacing(prop: &str) -> PropSpec {
    length(prop, "space").default_scale(&SPACE_SCALE)
}

macro_rules! style_fn {
    ($(#[$meta:meta])* $name:ident, $store:ident => $build:expr) => {
        static $store: Lazy<StyleFn> = Lazy::new(|| $build);

        $(#[$meta])*
        pub fn $name() -> &'static StyleFn {
            &$store
        }
    };
}

// Space

style_fn!(
    /// Margin and padding: `m`, `mt`, `mx`, `padding`, `paddingLeft`, ...
    /// Scale `space`, default `[0, 4, 8, 16, 32, 64, 128, 256, 512]`.
    space, SPACE_FN => MARGIN_PROPS
        .iter()
        .chain(PADDING_PROPS)
        .fold(StyleFn::new(), |f, prop| f.with(spacing(prop)))
);

// Color

style_fn!(
    /// `color` (alias `textColor`), scale `colors`.
    text_color, TEXT_COLOR_FN => StyleFn::new()
        .with(scaled("textColor", "colors"))
        .with(scaled("color", "colors"))
);

style_fn!(
    /// `bg` and `backgroundColor`, scale `colors`. `backgroundColor` wins.
    bg_color, BG_COLOR_FN => StyleFn::new()
        .with(scaled("bg", "colors"))
        .with(scaled("backgroundColor", "colors"))
);

style_fn!(
    /// Text and background color.
    color, COLOR_FN => compose([text_color(), bg_color()])
);

// Layout

style_fn!(
    /// `width`, scale `widths`.
    width, WIDTH_FN => length("width", "widths").into()
);

style_fn!(
    /// `height`, scale `sizes`.
    height, HEIGHT_FN => length("height", "sizes").into()
);

style_fn!(
    /// `minWidth`, scale `sizes`.
    min_width, MIN_WIDTH_FN => length("minWidth", "sizes").into()
);

style_fn!(
    /// `maxWidth`, scale `sizes`.
    max_width, MAX_WIDTH_FN => length("maxWidth", "sizes").into()
);

style_fn!(
    /// `minHeight`, scale `sizes`.
    min_height, MIN_HEIGHT_FN => length("minHeight", "sizes").into()
);

style_fn!(
    /// `maxHeight`, scale `sizes`.
    max_height, MAX_HEIGHT_FN => length("maxHeight", "sizes").into()
);

style_fn!(
    /// `size`: writes both `width` and `height`. Scale `sizes`.
    size, SIZE_FN => length("size", "sizes").into()
);

style_fn!(display, DISPLAY_FN => plain("display").into());
style_fn!(vertical_align, VERTICAL_ALIGN_FN => plain("verticalAlign").into());
style_fn!(overflow, OVERFLOW_FN => plain("overflow").into());

style_fn!(
    /// Box dimensions and display. `width`/`height` beat `size`.
    layout, LAYOUT_FN => compose([
        size(),
        width(),
        height(),
        min_width(),
        max_width(),
        min_height(),
        max_height(),
        display(),
        vertical_align(),
        overflow(),
    ])
);

// Typography

style_fn!(
    /// `fontSize`, scale `fontSizes`, default `[12, 14, 16, 20, 24, 32, 48, 64, 72]`.
    font_size, FONT_SIZE_FN => length("fontSize", "fontSizes")
        .default_scale(&FONT_SIZE_SCALE)
        .into()
);

style_fn!(font_family, FONT_FAMILY_FN => scaled("fontFamily", "fonts").into());
style_fn!(font_weight, FONT_WEIGHT_FN => scaled("fontWeight", "fontWeights").into());
style_fn!(line_height, LINE_HEIGHT_FN => scaled("lineHeight", "lineHeights").into());
style_fn!(letter_spacing, LETTER_SPACING_FN => length("letterSpacing", "letterSpacings").into());
style_fn!(text_align, TEXT_ALIGN_FN => plain("textAlign").into());
style_fn!(font_style, FONT_STYLE_FN => plain("fontStyle").into());

style_fn!(
    /// Font and text properties.
    typography, TYPOGRAPHY_FN => compose([
        font_family(),
        font_size(),
        font_weight(),
        line_height(),
        letter_spacing(),
        text_align(),
        font_style(),
    ])
);

// Flexbox

style_fn!(align_items, ALIGN_ITEMS_FN => plain("alignItems").into());
style_fn!(align_content, ALIGN_CONTENT_FN => plain("alignContent").into());
style_fn!(justify_items, JUSTIFY_ITEMS_FN => plain("justifyItems").into());
style_fn!(justify_content, JUSTIFY_CONTENT_FN => plain("justifyContent").into());
style_fn!(flex_wrap, FLEX_WRAP_FN => plain("flexWrap").into());
style_fn!(flex_direction, FLEX_DIRECTION_FN => plain("flexDirection").into());
style_fn!(flex, FLEX_FN => plain("flex").into());
style_fn!(flex_basis, FLEX_BASIS_FN => PropSpec::new("flexBasis").unit(Unit::Length).into());
style_fn!(justify_self, JUSTIFY_SELF_FN => plain("justifySelf").into());
style_fn!(align_self, ALIGN_SELF_FN => plain("alignSelf").into());
style_fn!(order, ORDER_FN => plain("order").into());

style_fn!(
    /// Flex container and item properties.
    flexbox, FLEXBOX_FN => compose([
        align_items(),
        align_content(),
        justify_items(),
        justify_content(),
        flex_wrap(),
        flex_direction(),
        flex(),
        flex_basis(),
        justify_self(),
        align_self(),
        order(),
    ])
);

// Grid

style_fn!(
    /// `gridGap`, scale `space` with the default space scale.
    grid_gap, GRID_GAP_FN => spacing("gridGap").into()
);

style_fn!(
    /// `gridRowGap`, scale `space` with the default space scale.
    grid_row_gap, GRID_ROW_GAP_FN => spacing("gridRowGap").into()
);

style_fn!(
    /// `gridColumnGap`, scale `space` with the default space scale.
    grid_column_gap, GRID_COLUMN_GAP_FN => spacing("gridColumnGap").into()
);

style_fn!(grid_column, GRID_COLUMN_FN => plain("gridColumn").into());
style_fn!(grid_row, GRID_ROW_FN => plain("gridRow").into());
style_fn!(grid_area, GRID_AREA_FN => plain("gridArea").into());
style_fn!(grid_auto_flow, GRID_AUTO_FLOW_FN => plain("gridAutoFlow").into());
style_fn!(grid_auto_rows, GRID_AUTO_ROWS_FN => plain("gridAutoRows").into());
style_fn!(grid_auto_columns, GRID_AUTO_COLUMNS_FN => plain("gridAutoColumns").into());
style_fn!(grid_template_columns, GRID_TEMPLATE_COLUMNS_FN => plain("gridTemplateColumns").into());
style_fn!(grid_template_rows, GRID_TEMPLATE_ROWS_FN => plain("gridTemplateRows").into());
style_fn!(grid_template_areas, GRID_TEMPLATE_AREAS_FN => plain("gridTemplateAreas").into());

style_fn!(
    /// Grid container and item properties.
    grid, GRID_FN => compose([
        grid_gap(),
        grid_row_gap(),
        grid_column_gap(),
        grid_column(),
        grid_row(),
        grid_area(),
        grid_auto_flow(),
        grid_auto_rows(),
        grid_auto_columns(),
        grid_template_columns(),
        grid_template_rows(),
        grid_template_areas(),
    ])
);

// Borders

style_fn!(border, BORDER_FN => length("border", "borders").into());
style_fn!(border_top, BORDER_TOP_FN => length("borderTop", "borders").into());
style_fn!(border_right, BORDER_RIGHT_FN => length("borderRight", "borders").into());
style_fn!(border_bottom, BORDER_BOTTOM_FN => length("borderBottom", "borders").into());
style_fn!(border_left, BORDER_LEFT_FN => length("borderLeft", "borders").into());
style_fn!(border_width, BORDER_WIDTH_FN => length("borderWidth", "borderWidths").into());
style_fn!(border_style, BORDER_STYLE_FN => scaled("borderStyle", "borderStyles").into());
style_fn!(border_color, BORDER_COLOR_FN => scaled("borderColor", "colors").into());
style_fn!(border_radius, BORDER_RADIUS_FN => length("borderRadius", "radii").into());

style_fn!(
    /// Border shorthands and longhands.
    borders, BORDERS_FN => compose([
        border(),
        border_top(),
        border_right(),
        border_bottom(),
        border_left(),
        border_width(),
        border_style(),
        border_color(),
        border_radius(),
    ])
);

// Background

style_fn!(background_image, BACKGROUND_IMAGE_FN => plain("backgroundImage").into());
style_fn!(background_size, BACKGROUND_SIZE_FN => plain("backgroundSize").into());
style_fn!(background_position, BACKGROUND_POSITION_FN => plain("backgroundPosition").into());
style_fn!(background_repeat, BACKGROUND_REPEAT_FN => plain("backgroundRepeat").into());

style_fn!(
    /// `background` and its image longhands.
    background, BACKGROUND_FN => compose([
        &StyleFn::from(plain("background")),
        background_image(),
        background_size(),
        background_position(),
        background_repeat(),
    ])
);

// Position

style_fn!(z_index, Z_INDEX_FN => scaled("zIndex", "zIndices").into());
style_fn!(top, TOP_FN => length("top", "space").into());
style_fn!(right, RIGHT_FN => length("right", "space").into());
style_fn!(bottom, BOTTOM_FN => length("bottom", "space").into());
style_fn!(left, LEFT_FN => length("left", "space").into());

style_fn!(
    /// `position`, `zIndex` and offsets.
    position, POSITION_FN => compose([
        &StyleFn::from(plain("position")),
        z_index(),
        top(),
        right(),
        bottom(),
        left(),
    ])
);

// Misc

style_fn!(opacity, OPACITY_FN => plain("opacity").into());
style_fn!(box_shadow, BOX_SHADOW_FN => scaled("boxShadow", "shadows").into());

// Variants

style_fn!(
    /// `textStyle`: spreads `theme.textStyles[name]`.
    text_style, TEXT_STYLE_FN => PropSpec::variant("textStyle", "textStyles").into()
);

style_fn!(
    /// `colors`: spreads `theme.colorStyles[name]`.
    color_style, COLOR_STYLE_FN => PropSpec::variant("colors", "colorStyles").into()
);

style_fn!(
    /// `variant`: spreads `theme.buttons[name]`.
    button_style, BUTTON_STYLE_FN => PropSpec::variant("variant", "buttons").into()
);

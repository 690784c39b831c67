//! Built-in mnemonic tables.

mod command;
mod enums;

use crate::types::{Category, MnemonicEntry};

use enums::*;

/// Every built-in table, keyed by the category that selects it.
///
/// `Debug` and `LogEvent` share one table.
pub(crate) fn builtin() -> Vec<(Category, &'static [MnemonicEntry])> {
    vec![
        (Category::Align, ALIGN),
        (Category::AlphaChannel, ALPHA_CHANNEL),
        (Category::Boolean, BOOLEAN),
        (Category::Cache, CACHE),
        (Category::Channel, CHANNEL),
        (Category::Class, CLASS),
        (Category::ClipPath, CLIP_PATH),
        (Category::Colorspace, COLORSPACE),
        (Category::Command, command::COMMAND),
        (Category::Compose, COMPOSE),
        (Category::Compress, COMPRESS),
        (Category::DataType, DATA_TYPE),
        (Category::Debug, LOG_EVENT),
        (Category::Decorate, DECORATE),
        (Category::Direction, DIRECTION),
        (Category::Dispose, DISPOSE),
        (Category::Distort, DISTORT),
        (Category::Dither, DITHER),
        (Category::Endian, ENDIAN),
        (Category::Evaluate, EVALUATE),
        (Category::FillRule, FILL_RULE),
        (Category::Filter, FILTER),
        (Category::Function, FUNCTION),
        (Category::Gravity, GRAVITY),
        (Category::Intent, INTENT),
        (Category::Interlace, INTERLACE),
        (Category::Interpolate, INTERPOLATE),
        (Category::Kernel, KERNEL),
        (Category::Layer, LAYER),
        (Category::LineCap, LINE_CAP),
        (Category::LineJoin, LINE_JOIN),
        (Category::List, LIST),
        (Category::LogEvent, LOG_EVENT),
        (Category::Method, METHOD),
        (Category::Metric, METRIC),
        (Category::Mode, MODE),
        (Category::Morphology, MORPHOLOGY),
        (Category::Noise, NOISE),
        (Category::Orientation, ORIENTATION),
        (Category::PixelChannel, PIXEL_CHANNEL),
        (Category::PixelIntensity, PIXEL_INTENSITY),
        (Category::PixelMask, PIXEL_MASK),
        (Category::PixelTrait, PIXEL_TRAIT),
        (Category::PolicyDomain, POLICY_DOMAIN),
        (Category::PolicyRights, POLICY_RIGHTS),
        (Category::Preview, PREVIEW),
        (Category::Primitive, PRIMITIVE),
        (Category::QuantumFormat, QUANTUM_FORMAT),
        (Category::Resolution, RESOLUTION),
        (Category::Resource, RESOURCE),
        (Category::SparseColor, SPARSE_COLOR),
        (Category::Statistic, STATISTIC),
        (Category::Storage, STORAGE),
        (Category::Stretch, STRETCH),
        (Category::Style, STYLE),
        (Category::Type, TYPE),
        (Category::Validate, VALIDATE),
        (Category::VirtualPixel, VIRTUAL_PIXEL),
    ]
}

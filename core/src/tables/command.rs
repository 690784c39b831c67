//! Command-line option table.
//!
//! Sorted by [`compare_command`](crate::compare_command): the name after the
//! sigil first, ignoring case, then the sigil itself. `value` is the number of
//! arguments the option consumes.

use crate::types::{MnemonicEntry, OptionFlags as F};

pub(crate) static COMMAND: &[MnemonicEntry] = &[
    MnemonicEntry::new("(", 0).with_flags(F::NO_IMAGE_OPERATOR).hidden(),
    MnemonicEntry::new(")", 0).with_flags(F::NO_IMAGE_OPERATOR).hidden(),
    MnemonicEntry::new("{", 0).with_flags(F::NO_IMAGE_OPERATOR).hidden(),
    MnemonicEntry::new("}", 0).with_flags(F::NO_IMAGE_OPERATOR).hidden(),
    MnemonicEntry::new("--", 1).with_flags(F::NO_IMAGE_OPERATOR).hidden(),
    MnemonicEntry::new("+adaptive-blur", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-adaptive-blur", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+adaptive-resize", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-adaptive-resize", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+adaptive-sharpen", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-adaptive-sharpen", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+adjoin", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-adjoin", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+affine", 0).with_flags(F::REPLACED.union(F::DRAW_INFO)).hidden(),
    MnemonicEntry::new("-affine", 1).with_flags(F::REPLACED.union(F::DRAW_INFO)).hidden(),
    MnemonicEntry::new("+affinity", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-affinity", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("+alpha", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-alpha", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+annotate", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-annotate", 2)
        .with_flags(F::SIMPLE_OPERATOR.union(F::ALWAYS_INTERPRET_ARGS)),
    MnemonicEntry::new("+antialias", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-antialias", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+append", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-append", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+attenuate", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-attenuate", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+authenticate", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-authenticate", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+auto-gamma", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-auto-gamma", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+auto-level", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-auto-level", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+auto-orient", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-auto-orient", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+average", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-average", 0)
        .with_flags(F::REPLACED.union(F::LIST_OPERATOR).union(F::FIRE))
        .hidden(),
    MnemonicEntry::new("+backdrop", 0).with_flags(F::NON_MAGICK.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("-backdrop", 1).with_flags(F::NON_MAGICK.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+background", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-background", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+bench", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-bench", 1).with_flags(F::GENESIS),
    MnemonicEntry::new("+bias", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-bias", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+black-point-compensation", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-black-point-compensation", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+black-threshold", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-black-threshold", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+blend", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-blend", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+blue-primary", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-blue-primary", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+blue-shift", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-blue-shift", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+blur", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-blur", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+border", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-border", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+bordercolor", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-bordercolor", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+borderwidth", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-borderwidth", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+box", 0)
        .with_flags(F::REPLACED.union(F::IMAGE_INFO).union(F::DRAW_INFO))
        .hidden(),
    MnemonicEntry::new("-box", 1)
        .with_flags(F::REPLACED.union(F::IMAGE_INFO).union(F::DRAW_INFO))
        .hidden(),
    MnemonicEntry::new("+brightness-contrast", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-brightness-contrast", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+cache", 0).with_flags(F::GLOBAL),
    MnemonicEntry::new("-cache", 1).with_flags(F::GLOBAL),
    MnemonicEntry::new("+caption", 0).with_flags(F::IMAGE_INFO.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("-caption", 1).with_flags(F::IMAGE_INFO.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+cdl", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-cdl", 1).with_flags(F::SIMPLE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+channel", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-channel", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-channel-fx", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+charcoal", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-charcoal", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+chop", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-chop", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+clamp", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-clamp", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+clip", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-clip", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+clip-mask", 0)
        .with_flags(F::SIMPLE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("-clip-mask", 1)
        .with_flags(F::SIMPLE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+clip-path", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-clip-path", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+clone", 0).with_flags(F::NO_IMAGE_OPERATOR),
    MnemonicEntry::new("-clone", 1).with_flags(F::NO_IMAGE_OPERATOR),
    MnemonicEntry::new("+clut", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-clut", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+coalesce", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-coalesce", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+color-matrix", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-color-matrix", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+colorize", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-colorize", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+colormap", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-colormap", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+colors", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-colors", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+colorspace", 0).with_flags(F::IMAGE_INFO.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("-colorspace", 1).with_flags(F::IMAGE_INFO.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("+combine", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-combine", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+comment", 0).with_flags(F::IMAGE_INFO.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("-comment", 1).with_flags(F::IMAGE_INFO.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+compose", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-compose", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+composite", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-composite", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+compress", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-compress", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+concurrent", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-concurrent", 0).with_flags(F::GENESIS),
    MnemonicEntry::new("+contrast", 0).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)).hidden(),
    MnemonicEntry::new("-contrast", 0).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)).hidden(),
    MnemonicEntry::new("+contrast-stretch", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-contrast-stretch", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+convolve", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-convolve", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+crop", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-crop", 1).with_flags(F::SIMPLE_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+cycle", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-cycle", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+debug", 0).with_flags(F::GLOBAL.union(F::FIRE)),
    MnemonicEntry::new("-debug", 1).with_flags(F::GLOBAL.union(F::FIRE)),
    MnemonicEntry::new("+decipher", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-decipher", 1)
        .with_flags(F::SIMPLE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+deconstruct", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-deconstruct", 0)
        .with_flags(F::REPLACED.union(F::LIST_OPERATOR).union(F::FIRE))
        .hidden(),
    MnemonicEntry::new("+define", 1).with_flags(F::IMAGE_INFO.union(F::FIRE)),
    MnemonicEntry::new("-define", 1).with_flags(F::IMAGE_INFO.union(F::FIRE)),
    MnemonicEntry::new("+delay", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-delay", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+delete", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-delete", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+density", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-density", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+depth", 0).with_flags(F::IMAGE_INFO.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("-depth", 1).with_flags(F::IMAGE_INFO.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("+descend", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-descend", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+deskew", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-deskew", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+despeckle", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-despeckle", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+direction", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-direction", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+displace", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-displace", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+display", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-display", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+dispose", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-dispose", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+dissimilarity-threshold", 0)
        .with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("-dissimilarity-threshold", 1)
        .with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("+dissolve", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-dissolve", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+distort", 2)
        .with_flags(F::SIMPLE_OPERATOR.union(F::ALWAYS_INTERPRET_ARGS)),
    MnemonicEntry::new("-distort", 2)
        .with_flags(F::SIMPLE_OPERATOR.union(F::ALWAYS_INTERPRET_ARGS)),
    MnemonicEntry::new("+dither", 0).with_flags(F::IMAGE_INFO.union(F::QUANTIZE_INFO)),
    MnemonicEntry::new("-dither", 1).with_flags(F::IMAGE_INFO.union(F::QUANTIZE_INFO)),
    MnemonicEntry::new("+draw", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-draw", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+duplicate", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-duplicate", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+duration", 1).with_flags(F::GENESIS),
    MnemonicEntry::new("-duration", 1).with_flags(F::GENESIS),
    MnemonicEntry::new("+edge", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-edge", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+emboss", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-emboss", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+encipher", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-encipher", 1)
        .with_flags(F::SIMPLE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+encoding", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-encoding", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+endian", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-endian", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+enhance", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-enhance", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+equalize", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-equalize", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+evaluate", 2).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-evaluate", 2).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+evaluate-sequence", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-evaluate-sequence", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-exit", 0).with_flags(F::SPECIAL),
    MnemonicEntry::new("+extent", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-extent", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+extract", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-extract", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+family", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-family", 1).with_flags(F::DRAW_INFO),
    MnemonicEntry::new("+features", 0).with_flags(F::SIMPLE_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-features", 1).with_flags(F::SIMPLE_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+fft", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-fft", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+fill", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-fill", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+filter", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-filter", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+flatten", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-flatten", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+flip", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-flip", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+floodfill", 2).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-floodfill", 2).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+flop", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-flop", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+font", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-font", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+foreground", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-foreground", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+format", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-format", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+frame", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-frame", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+function", 2).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-function", 2)
        .with_flags(F::SIMPLE_OPERATOR.union(F::ALWAYS_INTERPRET_ARGS)),
    MnemonicEntry::new("+fuzz", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-fuzz", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+fx", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-fx", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+gamma", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-gamma", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+gaussian", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-gaussian", 1).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)).hidden(),
    MnemonicEntry::new("+gaussian-blur", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-gaussian-blur", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+geometry", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-geometry", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+gravity", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-gravity", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+grayscale", 1).with_flags(F::SIMPLE_OPERATOR).hidden(),
    MnemonicEntry::new("-grayscale", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+green-primary", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-green-primary", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+hald-clut", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-hald-clut", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+highlight-color", 0).with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("-highlight-color", 1).with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("+iconGeometry", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-iconGeometry", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+iconic", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-iconic", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+identify", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-identify", 0).with_flags(F::SIMPLE_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+ift", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-ift", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+immutable", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-immutable", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+implode", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-implode", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+insert", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-insert", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+intensity", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-intensity", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+intent", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-intent", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+interlace", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-interlace", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+interline-spacing", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-interline-spacing", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+interpolate", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-interpolate", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+interpolative-resize", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-interpolative-resize", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+interword-spacing", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-interword-spacing", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+kerning", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-kerning", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+label", 0).with_flags(F::IMAGE_INFO.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("-label", 1).with_flags(F::IMAGE_INFO.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+lat", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-lat", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+layers", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-layers", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+level", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-level", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+level-colors", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-level-colors", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+limit", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-limit", 2).with_flags(F::GLOBAL.union(F::FIRE)),
    MnemonicEntry::new("+linear-stretch", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-linear-stretch", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+liquid-rescale", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-liquid-rescale", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+list", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-list", 1).with_flags(F::NO_IMAGE_OPERATOR),
    MnemonicEntry::new("+log", 0).with_flags(F::DEPRECATE),
    MnemonicEntry::new("-log", 1).with_flags(F::GLOBAL),
    MnemonicEntry::new("+loop", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-loop", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+lowlight-color", 0).with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("-lowlight-color", 1).with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("+magnify", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-magnify", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+map", 0)
        .with_flags(F::REPLACED.union(F::LIST_OPERATOR).union(F::FIRE))
        .hidden(),
    MnemonicEntry::new("-map", 1).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)).hidden(),
    MnemonicEntry::new("+mask", 0).with_flags(F::SIMPLE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("-mask", 1).with_flags(F::SIMPLE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+matte", 0).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)).hidden(),
    MnemonicEntry::new("-matte", 0).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)).hidden(),
    MnemonicEntry::new("+mattecolor", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-mattecolor", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+maximum", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-maximum", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("+median", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-median", 1)
        .with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR).union(F::FIRE))
        .hidden(),
    MnemonicEntry::new("+metric", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-metric", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+minimum", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-minimum", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("+mode", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-mode", 1).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)).hidden(),
    MnemonicEntry::new("+modulate", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-modulate", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+monitor", 0).with_flags(F::IMAGE_INFO.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("-monitor", 0).with_flags(F::IMAGE_INFO.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("+monochrome", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-monochrome", 0).with_flags(F::IMAGE_INFO.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("+morph", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-morph", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+morphology", 2).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-morphology", 2).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+mosaic", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-mosaic", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+motion-blur", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-motion-blur", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+name", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-name", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+negate", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-negate", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+noise", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-noise", 1).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("-noop", 0).with_flags(F::NO_IMAGE_OPERATOR),
    MnemonicEntry::new("+normalize", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-normalize", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+opaque", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-opaque", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+ordered-dither", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-ordered-dither", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+orient", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-orient", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+page", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-page", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+paint", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-paint", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+path", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-path", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+pause", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-pause", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+ping", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-ping", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+pointsize", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-pointsize", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+polaroid", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-polaroid", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+poly", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-poly", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+posterize", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-posterize", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+precision", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-precision", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+preview", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-preview", 1).with_flags(F::GLOBAL),
    MnemonicEntry::new("+print", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-print", 1)
        .with_flags(F::LIST_OPERATOR.union(F::ALWAYS_INTERPRET_ARGS).union(F::FIRE)),
    MnemonicEntry::new("+process", 1).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-process", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+profile", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-profile", 1).with_flags(F::SIMPLE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+quality", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-quality", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+quantize", 0).with_flags(F::QUANTIZE_INFO),
    MnemonicEntry::new("-quantize", 1).with_flags(F::QUANTIZE_INFO),
    MnemonicEntry::new("+quiet", 0).with_flags(F::GLOBAL.union(F::FIRE)),
    MnemonicEntry::new("-quiet", 0).with_flags(F::GLOBAL.union(F::FIRE)),
    MnemonicEntry::new("+radial-blur", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-radial-blur", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+raise", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-raise", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+random-threshold", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-random-threshold", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-read", 1).with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+recolor", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-recolor", 1).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)).hidden(),
    MnemonicEntry::new("+red-primary", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-red-primary", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+regard-warnings", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-regard-warnings", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+region", 0).with_flags(F::NO_IMAGE_OPERATOR),
    MnemonicEntry::new("-region", 1).with_flags(F::NO_IMAGE_OPERATOR),
    MnemonicEntry::new("+remap", 0)
        .with_flags(F::LIST_OPERATOR.union(F::NEVER_INTERPRET_ARGS).union(F::FIRE)),
    MnemonicEntry::new("-remap", 1).with_flags(F::SIMPLE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+remote", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-remote", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+render", 0).with_flags(F::DRAW_INFO),
    MnemonicEntry::new("-render", 0).with_flags(F::DRAW_INFO),
    MnemonicEntry::new("+repage", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-repage", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+resample", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-resample", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+resize", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-resize", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+respect-parenthesis", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-respect-parenthesis", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+reverse", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-reverse", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+roll", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-roll", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+rotate", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-rotate", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+sample", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-sample", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+sampling-factor", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-sampling-factor", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+sans", 1)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS))
        .hidden(),
    MnemonicEntry::new("-sans", 1)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS))
        .hidden(),
    MnemonicEntry::new("+sans0", 0)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS))
        .hidden(),
    MnemonicEntry::new("-sans0", 0)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS))
        .hidden(),
    MnemonicEntry::new("+sans1", 1)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS))
        .hidden(),
    MnemonicEntry::new("-sans1", 1)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS))
        .hidden(),
    MnemonicEntry::new("+sans2", 2)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS))
        .hidden(),
    MnemonicEntry::new("-sans2", 2)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS))
        .hidden(),
    MnemonicEntry::new("+scale", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-scale", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+scene", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-scene", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+scenes", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-scenes", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+screen", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-screen", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-script", 1).with_flags(F::SPECIAL.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+seed", 0).with_flags(F::GLOBAL),
    MnemonicEntry::new("-seed", 1).with_flags(F::GLOBAL),
    MnemonicEntry::new("+segment", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-segment", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+selective-blur", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-selective-blur", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+separate", 0).with_flags(F::DEPRECATE.union(F::FIRE)).hidden(),
    MnemonicEntry::new("-separate", 0).with_flags(F::SIMPLE_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+sepia-tone", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-sepia-tone", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+set", 1).with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("-set", 2).with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+shade", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-shade", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+shadow", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-shadow", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+shared-memory", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-shared-memory", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+sharpen", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-sharpen", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+shave", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-shave", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+shear", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-shear", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+sigmoidal-contrast", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-sigmoidal-contrast", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+silent", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-silent", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+similarity-threshold", 0).with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("-similarity-threshold", 1).with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("+size", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-size", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+sketch", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-sketch", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+smush", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-smush", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+snaps", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-snaps", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+solarize", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-solarize", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+sparse-color", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-sparse-color", 2)
        .with_flags(F::SIMPLE_OPERATOR.union(F::ALWAYS_INTERPRET_ARGS)),
    MnemonicEntry::new("+splice", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-splice", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+spread", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-spread", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+statistic", 2).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-statistic", 2).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+stegano", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-stegano", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+stereo", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-stereo", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+stretch", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-stretch", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+strip", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-strip", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+stroke", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-stroke", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+strokewidth", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-strokewidth", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+style", 0).with_flags(F::DRAW_INFO),
    MnemonicEntry::new("-style", 1).with_flags(F::DRAW_INFO),
    MnemonicEntry::new("-subimage", 0).with_flags(F::LIST_OPERATOR),
    MnemonicEntry::new("+subimage-search", 0).with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("-subimage-search", 0).with_flags(F::NON_MAGICK.union(F::IMAGE_INFO)),
    MnemonicEntry::new("+swap", 0).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("-swap", 1).with_flags(F::LIST_OPERATOR.union(F::FIRE)),
    MnemonicEntry::new("+swirl", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-swirl", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+synchronize", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-synchronize", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+taint", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-taint", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+text-font", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-text-font", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+texture", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-texture", 1).with_flags(F::IMAGE_INFO.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+threshold", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-threshold", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+thumbnail", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-thumbnail", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+tile", 0).with_flags(F::DRAW_INFO.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("-tile", 1).with_flags(F::DRAW_INFO.union(F::NEVER_INTERPRET_ARGS)),
    MnemonicEntry::new("+tile-offset", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-tile-offset", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+tint", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-tint", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+title", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-title", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+transform", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-transform", 0).with_flags(F::REPLACED.union(F::SIMPLE_OPERATOR)).hidden(),
    MnemonicEntry::new("+transparent", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-transparent", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+transparent-color", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-transparent-color", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+transpose", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-transpose", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+transverse", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-transverse", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+treedepth", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-treedepth", 1).with_flags(F::QUANTIZE_INFO),
    MnemonicEntry::new("+trim", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-trim", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+type", 0).with_flags(F::IMAGE_INFO.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("-type", 1).with_flags(F::IMAGE_INFO.union(F::SIMPLE_OPERATOR)),
    MnemonicEntry::new("+undercolor", 0).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("-undercolor", 1).with_flags(F::IMAGE_INFO.union(F::DRAW_INFO)),
    MnemonicEntry::new("+unique", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("-unique", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+unique-colors", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-unique-colors", 0).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+units", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-units", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+unsharp", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-unsharp", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+update", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-update", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+use-pixmap", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-use-pixmap", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+verbose", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-verbose", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+version", 0).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-version", 0).with_flags(F::NO_IMAGE_OPERATOR),
    MnemonicEntry::new("+view", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-view", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+vignette", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-vignette", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+virtual-pixel", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-virtual-pixel", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+visual", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-visual", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+watermark", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-watermark", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+wave", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-wave", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+weight", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-weight", 1).with_flags(F::DRAW_INFO),
    MnemonicEntry::new("+white-point", 0).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("-white-point", 1).with_flags(F::IMAGE_INFO),
    MnemonicEntry::new("+white-threshold", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("-white-threshold", 1).with_flags(F::SIMPLE_OPERATOR),
    MnemonicEntry::new("+window", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-window", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+window-group", 0).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("-window-group", 1).with_flags(F::NON_MAGICK),
    MnemonicEntry::new("+write", 1)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS).union(F::FIRE)),
    MnemonicEntry::new("-write", 1)
        .with_flags(F::NO_IMAGE_OPERATOR.union(F::NEVER_INTERPRET_ARGS).union(F::FIRE)),
];

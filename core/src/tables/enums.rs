//! Enumerated mnemonic tables.
//!
//! Rows are listed in lookup order: the first row carrying a value is the
//! spelling reported by reverse lookups, so aliases follow their canonical
//! name.

use crate::channel::bits;
use crate::types::{Category, MnemonicEntry, OptionFlags as F};

pub(crate) static ALIGN: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Center", 1),
    MnemonicEntry::new("End", 2),
    MnemonicEntry::new("Left", 3),
    MnemonicEntry::new("Middle", 1),
    MnemonicEntry::new("Right", 2),
    MnemonicEntry::new("Start", 3),
];

pub(crate) static ALPHA_CHANNEL: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Activate", 1),
    MnemonicEntry::new("Background", 2),
    MnemonicEntry::new("Copy", 3),
    MnemonicEntry::new("Deactivate", 4),
    MnemonicEntry::new("Extract", 5),
    MnemonicEntry::new("Off", 4),
    MnemonicEntry::new("On", 1),
    MnemonicEntry::new("Opaque", 6),
    MnemonicEntry::new("Remove", 7),
    MnemonicEntry::new("Set", 8),
    MnemonicEntry::new("Shape", 9),
    MnemonicEntry::new("Reset", 8).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("Transparent", 10),
];

pub(crate) static BOOLEAN: &[MnemonicEntry] = &[
    MnemonicEntry::new("False", 0),
    MnemonicEntry::new("True", 1),
    MnemonicEntry::new("0", 0),
    MnemonicEntry::new("1", 1),
];

pub(crate) static CACHE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Disk", 1),
    MnemonicEntry::new("Distributed", 2),
    MnemonicEntry::new("Map", 3),
    MnemonicEntry::new("Memory", 4),
    MnemonicEntry::new("Ping", 5),
];

pub(crate) static CHANNEL: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", bits::UNDEFINED).hidden(),
    MnemonicEntry::new("All", bits::COMPOSITE),
    MnemonicEntry::new("Sync", bits::SYNC),
    MnemonicEntry::new("Default", bits::DEFAULT),
    MnemonicEntry::new("A", bits::ALPHA),
    MnemonicEntry::new("Alpha", bits::ALPHA),
    MnemonicEntry::new("Black", bits::BLACK),
    MnemonicEntry::new("B", bits::BLUE),
    MnemonicEntry::new("Blue", bits::BLUE),
    MnemonicEntry::new("C", bits::CYAN),
    MnemonicEntry::new("Cyan", bits::CYAN),
    MnemonicEntry::new("Gray", bits::GRAY),
    MnemonicEntry::new("G", bits::GREEN),
    MnemonicEntry::new("Green", bits::GREEN),
    MnemonicEntry::new("H", bits::RED),
    MnemonicEntry::new("Hue", bits::RED),
    MnemonicEntry::new("K", bits::BLACK),
    MnemonicEntry::new("L", bits::BLUE),
    MnemonicEntry::new("Lightness", bits::BLUE),
    MnemonicEntry::new("Luminance", bits::BLUE),
    MnemonicEntry::new("Luminosity", bits::BLUE).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("M", bits::MAGENTA),
    MnemonicEntry::new("Magenta", bits::MAGENTA),
    MnemonicEntry::new("Matte", bits::ALPHA).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("Opacity", bits::ALPHA).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("R", bits::RED),
    MnemonicEntry::new("Red", bits::RED),
    MnemonicEntry::new("S", bits::GREEN),
    MnemonicEntry::new("Saturation", bits::GREEN),
    MnemonicEntry::new("Y", bits::YELLOW),
    MnemonicEntry::new("Yellow", bits::YELLOW),
];

pub(crate) static CLASS: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("DirectClass", 1),
    MnemonicEntry::new("PseudoClass", 2),
];

pub(crate) static CLIP_PATH: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("ObjectBoundingBox", 1),
    MnemonicEntry::new("UserSpace", 2),
    MnemonicEntry::new("UserSpaceOnUse", 3),
];

pub(crate) static COMPOSE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Atop", 1),
    MnemonicEntry::new("Blend", 2),
    MnemonicEntry::new("Blur", 3),
    MnemonicEntry::new("Bumpmap", 4),
    MnemonicEntry::new("ChangeMask", 5),
    MnemonicEntry::new("Clear", 6),
    MnemonicEntry::new("ColorBurn", 7),
    MnemonicEntry::new("ColorDodge", 8),
    MnemonicEntry::new("Colorize", 9),
    MnemonicEntry::new("CopyAlpha", 10),
    MnemonicEntry::new("CopyBlack", 11),
    MnemonicEntry::new("CopyBlue", 12),
    MnemonicEntry::new("CopyCyan", 13),
    MnemonicEntry::new("CopyGreen", 14),
    MnemonicEntry::new("Copy", 15),
    MnemonicEntry::new("CopyMagenta", 16),
    MnemonicEntry::new("CopyRed", 17),
    MnemonicEntry::new("CopyYellow", 18),
    MnemonicEntry::new("Darken", 19),
    MnemonicEntry::new("DarkenIntensity", 20),
    MnemonicEntry::new("DivideDst", 21),
    MnemonicEntry::new("DivideSrc", 22),
    MnemonicEntry::new("Dst", 23),
    MnemonicEntry::new("Difference", 24),
    MnemonicEntry::new("Displace", 25),
    MnemonicEntry::new("Dissolve", 26),
    MnemonicEntry::new("Distort", 27),
    MnemonicEntry::new("DstAtop", 28),
    MnemonicEntry::new("DstIn", 29),
    MnemonicEntry::new("DstOut", 30),
    MnemonicEntry::new("DstOver", 31),
    MnemonicEntry::new("Exclusion", 32),
    MnemonicEntry::new("HardLight", 33),
    MnemonicEntry::new("Hue", 34),
    MnemonicEntry::new("In", 35),
    MnemonicEntry::new("Intensity", 36),
    MnemonicEntry::new("Lighten", 37),
    MnemonicEntry::new("LightenIntensity", 38),
    MnemonicEntry::new("LinearBurn", 39),
    MnemonicEntry::new("LinearDodge", 40),
    MnemonicEntry::new("LinearLight", 41),
    MnemonicEntry::new("Luminize", 42),
    MnemonicEntry::new("Mathematics", 43),
    MnemonicEntry::new("MinusDst", 44),
    MnemonicEntry::new("MinusSrc", 45),
    MnemonicEntry::new("Modulate", 46),
    MnemonicEntry::new("ModulusAdd", 47),
    MnemonicEntry::new("ModulusSubtract", 48),
    MnemonicEntry::new("Multiply", 49),
    MnemonicEntry::new("None", 50),
    MnemonicEntry::new("Out", 51),
    MnemonicEntry::new("Overlay", 52),
    MnemonicEntry::new("Over", 53),
    MnemonicEntry::new("PegtopLight", 54),
    MnemonicEntry::new("PinLight", 55),
    MnemonicEntry::new("Plus", 56),
    MnemonicEntry::new("Replace", 57),
    MnemonicEntry::new("Saturate", 58),
    MnemonicEntry::new("Screen", 59),
    MnemonicEntry::new("SoftLight", 60),
    MnemonicEntry::new("Src", 61),
    MnemonicEntry::new("SrcAtop", 62),
    MnemonicEntry::new("SrcIn", 63),
    MnemonicEntry::new("SrcOut", 64),
    MnemonicEntry::new("SrcOver", 65),
    MnemonicEntry::new("VividLight", 66),
    MnemonicEntry::new("Xor", 67),
    MnemonicEntry::new("Divide", 21).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("Minus", 44).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("Threshold", 68).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("CopyOpacity", 10).hidden(),
];

pub(crate) static COMPRESS: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("B44", 1),
    MnemonicEntry::new("B44A", 2),
    MnemonicEntry::new("BZip", 3),
    MnemonicEntry::new("DXT1", 4),
    MnemonicEntry::new("DXT3", 5),
    MnemonicEntry::new("DXT5", 6),
    MnemonicEntry::new("Fax", 7),
    MnemonicEntry::new("Group4", 8),
    MnemonicEntry::new("JBIG1", 9),
    MnemonicEntry::new("JBIG2", 10),
    MnemonicEntry::new("JPEG", 11),
    MnemonicEntry::new("JPEG2000", 12),
    MnemonicEntry::new("Lossless", 13),
    MnemonicEntry::new("LosslessJPEG", 13),
    MnemonicEntry::new("LZMA", 14),
    MnemonicEntry::new("LZW", 15),
    MnemonicEntry::new("None", 16),
    MnemonicEntry::new("Piz", 17),
    MnemonicEntry::new("Pxr24", 18),
    MnemonicEntry::new("RLE", 19),
    MnemonicEntry::new("Zip", 20),
    MnemonicEntry::new("RunlengthEncoded", 19),
    MnemonicEntry::new("ZipS", 21),
];

pub(crate) static COLORSPACE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("CIELab", 1),
    MnemonicEntry::new("CMY", 2),
    MnemonicEntry::new("CMYK", 3),
    MnemonicEntry::new("Gray", 4),
    MnemonicEntry::new("HCL", 5),
    MnemonicEntry::new("HSB", 6),
    MnemonicEntry::new("HSL", 7),
    MnemonicEntry::new("HWB", 8),
    MnemonicEntry::new("Lab", 1),
    MnemonicEntry::new("LCH", 9),
    MnemonicEntry::new("LCHab", 10),
    MnemonicEntry::new("LCHuv", 11),
    MnemonicEntry::new("LMS", 12),
    MnemonicEntry::new("Log", 13),
    MnemonicEntry::new("Luv", 14),
    MnemonicEntry::new("OHTA", 15),
    MnemonicEntry::new("Rec601YCbCr", 16),
    MnemonicEntry::new("Rec709YCbCr", 17),
    MnemonicEntry::new("RGB", 18),
    MnemonicEntry::new("sRGB", 19),
    MnemonicEntry::new("Transparent", 20),
    MnemonicEntry::new("XYZ", 21),
    MnemonicEntry::new("YCbCr", 22),
    MnemonicEntry::new("YCC", 23),
    MnemonicEntry::new("YIQ", 24),
    MnemonicEntry::new("YPbPr", 25),
    MnemonicEntry::new("YUV", 26),
];

pub(crate) static DATA_TYPE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Byte", 1),
    MnemonicEntry::new("Long", 2),
    MnemonicEntry::new("Short", 3),
    MnemonicEntry::new("String", 4),
];

pub(crate) static DECORATE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("LineThrough", 1),
    MnemonicEntry::new("None", 2),
    MnemonicEntry::new("Overline", 3),
    MnemonicEntry::new("Underline", 4),
];

pub(crate) static DIRECTION: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("right-to-left", 1),
    MnemonicEntry::new("left-to-right", 2),
];

pub(crate) static DISPOSE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Background", 2),
    MnemonicEntry::new("None", 1),
    MnemonicEntry::new("Previous", 3),
    MnemonicEntry::new("Undefined", 0),
    MnemonicEntry::new("0", 0),
    MnemonicEntry::new("1", 1),
    MnemonicEntry::new("2", 2),
    MnemonicEntry::new("3", 3),
];

pub(crate) static DISTORT: &[MnemonicEntry] = &[
    MnemonicEntry::new("Affine", 1),
    MnemonicEntry::new("AffineProjection", 2),
    MnemonicEntry::new("ScaleRotateTranslate", 3),
    MnemonicEntry::new("SRT", 3),
    MnemonicEntry::new("Perspective", 4),
    MnemonicEntry::new("PerspectiveProjection", 5),
    MnemonicEntry::new("Bilinear", 6).hidden(),
    MnemonicEntry::new("BilinearForward", 6),
    MnemonicEntry::new("BilinearReverse", 7),
    MnemonicEntry::new("Polynomial", 8),
    MnemonicEntry::new("Arc", 9),
    MnemonicEntry::new("Polar", 10),
    MnemonicEntry::new("DePolar", 11),
    MnemonicEntry::new("Barrel", 12),
    MnemonicEntry::new("Cylinder2Plane", 13).hidden(),
    MnemonicEntry::new("Plane2Cylinder", 14).hidden(),
    MnemonicEntry::new("BarrelInverse", 15),
    MnemonicEntry::new("Shepards", 16),
    MnemonicEntry::new("Resize", 17),
];

pub(crate) static DITHER: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("None", 1),
    MnemonicEntry::new("FloydSteinberg", 2),
    MnemonicEntry::new("Riemersma", 3),
];

pub(crate) static ENDIAN: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("LSB", 1),
    MnemonicEntry::new("MSB", 2),
];

pub(crate) static EVALUATE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Abs", 1),
    MnemonicEntry::new("Add", 2),
    MnemonicEntry::new("AddModulus", 3),
    MnemonicEntry::new("And", 4),
    MnemonicEntry::new("Cos", 5),
    MnemonicEntry::new("Cosine", 5),
    MnemonicEntry::new("Divide", 6),
    MnemonicEntry::new("Exp", 7),
    MnemonicEntry::new("Exponential", 7),
    MnemonicEntry::new("GaussianNoise", 8),
    MnemonicEntry::new("ImpulseNoise", 9),
    MnemonicEntry::new("LaplacianNoise", 10),
    MnemonicEntry::new("LeftShift", 11),
    MnemonicEntry::new("Log", 12),
    MnemonicEntry::new("Max", 13),
    MnemonicEntry::new("Mean", 14),
    MnemonicEntry::new("Median", 15),
    MnemonicEntry::new("Min", 16),
    MnemonicEntry::new("MultiplicativeNoise", 17),
    MnemonicEntry::new("Multiply", 18),
    MnemonicEntry::new("Or", 19),
    MnemonicEntry::new("PoissonNoise", 20),
    MnemonicEntry::new("Pow", 21),
    MnemonicEntry::new("RightShift", 22),
    MnemonicEntry::new("Set", 23),
    MnemonicEntry::new("Sin", 24),
    MnemonicEntry::new("Sine", 24),
    MnemonicEntry::new("Subtract", 25),
    MnemonicEntry::new("Sum", 26),
    MnemonicEntry::new("Threshold", 27),
    MnemonicEntry::new("ThresholdBlack", 28),
    MnemonicEntry::new("ThresholdWhite", 29),
    MnemonicEntry::new("UniformNoise", 30),
    MnemonicEntry::new("Xor", 31),
];

pub(crate) static FILL_RULE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Evenodd", 1),
    MnemonicEntry::new("NonZero", 2),
];

pub(crate) static FILTER: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Bartlett", 1),
    MnemonicEntry::new("Blackman", 2),
    MnemonicEntry::new("Bohman", 3),
    MnemonicEntry::new("Box", 4),
    MnemonicEntry::new("Catrom", 5),
    MnemonicEntry::new("Cosine", 6),
    MnemonicEntry::new("Cubic", 7),
    MnemonicEntry::new("Gaussian", 8),
    MnemonicEntry::new("Hamming", 9),
    MnemonicEntry::new("Hann", 10),
    MnemonicEntry::new("Hanning", 10).hidden(),
    MnemonicEntry::new("Hermite", 11),
    MnemonicEntry::new("Jinc", 12),
    MnemonicEntry::new("Kaiser", 13),
    MnemonicEntry::new("Lagrange", 14),
    MnemonicEntry::new("Lanczos", 15),
    MnemonicEntry::new("Lanczos2", 16),
    MnemonicEntry::new("Lanczos2Sharp", 17),
    MnemonicEntry::new("LanczosRadius", 18),
    MnemonicEntry::new("LanczosSharp", 19),
    MnemonicEntry::new("Mitchell", 20),
    MnemonicEntry::new("Parzen", 21),
    MnemonicEntry::new("Point", 22),
    MnemonicEntry::new("Quadratic", 23),
    MnemonicEntry::new("Robidoux", 24),
    MnemonicEntry::new("RobidouxSharp", 25),
    MnemonicEntry::new("Sinc", 26),
    MnemonicEntry::new("SincFast", 27),
    MnemonicEntry::new("Spline", 28),
    MnemonicEntry::new("Triangle", 29),
    MnemonicEntry::new("Welch", 30),
    MnemonicEntry::new("Welsh", 30).hidden(),
];

pub(crate) static FUNCTION: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Polynomial", 1),
    MnemonicEntry::new("Sinusoid", 2),
    MnemonicEntry::new("ArcSin", 3),
    MnemonicEntry::new("ArcTan", 4),
];

pub(crate) static GRAVITY: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("None", 0),
    MnemonicEntry::new("Center", 1),
    MnemonicEntry::new("East", 2),
    MnemonicEntry::new("Forget", 3),
    MnemonicEntry::new("NorthEast", 4),
    MnemonicEntry::new("North", 5),
    MnemonicEntry::new("NorthWest", 6),
    MnemonicEntry::new("SouthEast", 7),
    MnemonicEntry::new("South", 8),
    MnemonicEntry::new("SouthWest", 9),
    MnemonicEntry::new("West", 10),
];

pub(crate) static INTENT: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Absolute", 1),
    MnemonicEntry::new("Perceptual", 2),
    MnemonicEntry::new("Relative", 3),
    MnemonicEntry::new("Saturation", 4),
];

pub(crate) static INTERLACE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Line", 1),
    MnemonicEntry::new("None", 2),
    MnemonicEntry::new("Plane", 3),
    MnemonicEntry::new("Partition", 4),
    MnemonicEntry::new("GIF", 5),
    MnemonicEntry::new("JPEG", 6),
    MnemonicEntry::new("PNG", 7),
];

pub(crate) static INTERPOLATE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Average", 1),
    MnemonicEntry::new("Average4", 1),
    MnemonicEntry::new("Average9", 2),
    MnemonicEntry::new("Average16", 3),
    MnemonicEntry::new("Background", 4),
    MnemonicEntry::new("Bilinear", 5),
    MnemonicEntry::new("Blend", 6),
    MnemonicEntry::new("Catrom", 7),
    MnemonicEntry::new("Integer", 8),
    MnemonicEntry::new("Mesh", 9),
    MnemonicEntry::new("Nearest", 10),
    MnemonicEntry::new("NearestNeighbor", 10).hidden(),
    MnemonicEntry::new("Spline", 11),
];

pub(crate) static KERNEL: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Unity", 1),
    MnemonicEntry::new("Gaussian", 2),
    MnemonicEntry::new("DoG", 3),
    MnemonicEntry::new("LoG", 4),
    MnemonicEntry::new("Blur", 5),
    MnemonicEntry::new("Comet", 6),
    MnemonicEntry::new("Binomial", 7),
    MnemonicEntry::new("Laplacian", 8),
    MnemonicEntry::new("Sobel", 9),
    MnemonicEntry::new("FreiChen", 10),
    MnemonicEntry::new("Roberts", 11),
    MnemonicEntry::new("Prewitt", 12),
    MnemonicEntry::new("Compass", 13),
    MnemonicEntry::new("Kirsch", 14),
    MnemonicEntry::new("Diamond", 15),
    MnemonicEntry::new("Square", 16),
    MnemonicEntry::new("Rectangle", 17),
    MnemonicEntry::new("Disk", 18),
    MnemonicEntry::new("Octagon", 19),
    MnemonicEntry::new("Plus", 20),
    MnemonicEntry::new("Cross", 21),
    MnemonicEntry::new("Ring", 22),
    MnemonicEntry::new("Peaks", 23),
    MnemonicEntry::new("Edges", 24),
    MnemonicEntry::new("Corners", 25),
    MnemonicEntry::new("Diagonals", 26),
    MnemonicEntry::new("LineEnds", 27),
    MnemonicEntry::new("LineJunctions", 28),
    MnemonicEntry::new("Ridges", 29),
    MnemonicEntry::new("ConvexHull", 30),
    MnemonicEntry::new("ThinSe", 31),
    MnemonicEntry::new("Skeleton", 32),
    MnemonicEntry::new("Chebyshev", 33),
    MnemonicEntry::new("Manhattan", 34),
    MnemonicEntry::new("Octagonal", 35),
    MnemonicEntry::new("Euclidean", 36),
    MnemonicEntry::new("User Defined", 37).hidden(),
];

pub(crate) static LAYER: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Coalesce", 1),
    MnemonicEntry::new("CompareAny", 2),
    MnemonicEntry::new("CompareClear", 3),
    MnemonicEntry::new("CompareOverlay", 4),
    MnemonicEntry::new("Dispose", 5),
    MnemonicEntry::new("Optimize", 6),
    MnemonicEntry::new("OptimizeFrame", 7),
    MnemonicEntry::new("OptimizePlus", 8),
    MnemonicEntry::new("OptimizeTransparency", 9),
    MnemonicEntry::new("RemoveDups", 10),
    MnemonicEntry::new("RemoveZero", 11),
    MnemonicEntry::new("Composite", 12),
    MnemonicEntry::new("Merge", 13),
    MnemonicEntry::new("Flatten", 14),
    MnemonicEntry::new("Mosaic", 15),
    MnemonicEntry::new("TrimBounds", 16),
];

pub(crate) static LINE_CAP: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Butt", 1),
    MnemonicEntry::new("Round", 2),
    MnemonicEntry::new("Square", 3),
];

pub(crate) static LINE_JOIN: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Bevel", 1),
    MnemonicEntry::new("Miter", 2),
    MnemonicEntry::new("Round", 3),
];

pub(crate) static LIST: &[MnemonicEntry] = &[
    MnemonicEntry::new("Align", Category::Align as i64),
    MnemonicEntry::new("Alpha", Category::AlphaChannel as i64),
    MnemonicEntry::new("Boolean", Category::Boolean as i64),
    MnemonicEntry::new("Cache", Category::Cache as i64),
    MnemonicEntry::new("Channel", Category::Channel as i64),
    MnemonicEntry::new("Class", Category::Class as i64),
    MnemonicEntry::new("ClipPath", Category::ClipPath as i64),
    MnemonicEntry::new("Coder", Category::Coder as i64),
    MnemonicEntry::new("Color", Category::Color as i64),
    MnemonicEntry::new("Colorspace", Category::Colorspace as i64),
    MnemonicEntry::new("Command", Category::Command as i64),
    MnemonicEntry::new("Compose", Category::Compose as i64),
    MnemonicEntry::new("Compress", Category::Compress as i64),
    MnemonicEntry::new("Configure", Category::Configure as i64),
    MnemonicEntry::new("DataType", Category::DataType as i64),
    MnemonicEntry::new("Debug", Category::Debug as i64),
    MnemonicEntry::new("Decoration", Category::Decorate as i64),
    MnemonicEntry::new("Delegate", Category::Delegate as i64),
    MnemonicEntry::new("Direction", Category::Direction as i64),
    MnemonicEntry::new("Dispose", Category::Dispose as i64),
    MnemonicEntry::new("Distort", Category::Distort as i64),
    MnemonicEntry::new("Dither", Category::Dither as i64),
    MnemonicEntry::new("Endian", Category::Endian as i64),
    MnemonicEntry::new("Evaluate", Category::Evaluate as i64),
    MnemonicEntry::new("FillRule", Category::FillRule as i64),
    MnemonicEntry::new("Filter", Category::Filter as i64),
    MnemonicEntry::new("Font", Category::Font as i64),
    MnemonicEntry::new("Format", Category::Format as i64),
    MnemonicEntry::new("Function", Category::Function as i64),
    MnemonicEntry::new("Gravity", Category::Gravity as i64),
    MnemonicEntry::new("Intensity", Category::PixelIntensity as i64),
    MnemonicEntry::new("Intent", Category::Intent as i64),
    MnemonicEntry::new("Interlace", Category::Interlace as i64),
    MnemonicEntry::new("Interpolate", Category::Interpolate as i64),
    MnemonicEntry::new("Kernel", Category::Kernel as i64),
    MnemonicEntry::new("Layers", Category::Layer as i64),
    MnemonicEntry::new("LineCap", Category::LineCap as i64),
    MnemonicEntry::new("LineJoin", Category::LineJoin as i64),
    MnemonicEntry::new("List", Category::List as i64),
    MnemonicEntry::new("Locale", Category::Locale as i64),
    MnemonicEntry::new("LogEvent", Category::LogEvent as i64),
    MnemonicEntry::new("Log", Category::Log as i64),
    MnemonicEntry::new("Magic", Category::Magic as i64),
    MnemonicEntry::new("Method", Category::Method as i64),
    MnemonicEntry::new("Metric", Category::Metric as i64),
    MnemonicEntry::new("Mime", Category::Mime as i64),
    MnemonicEntry::new("Mode", Category::Mode as i64),
    MnemonicEntry::new("Morphology", Category::Morphology as i64),
    MnemonicEntry::new("Module", Category::Module as i64),
    MnemonicEntry::new("Noise", Category::Noise as i64),
    MnemonicEntry::new("Orientation", Category::Orientation as i64),
    MnemonicEntry::new("PixelChannel", Category::PixelChannel as i64),
    MnemonicEntry::new("PixelIntensity", Category::PixelIntensity as i64),
    MnemonicEntry::new("PixelMask", Category::PixelMask as i64),
    MnemonicEntry::new("PixelTrait", Category::PixelTrait as i64),
    MnemonicEntry::new("Policy", Category::Policy as i64),
    MnemonicEntry::new("PolicyDomain", Category::PolicyDomain as i64),
    MnemonicEntry::new("PolicyRights", Category::PolicyRights as i64),
    MnemonicEntry::new("Preview", Category::Preview as i64),
    MnemonicEntry::new("Primitive", Category::Primitive as i64),
    MnemonicEntry::new("QuantumFormat", Category::QuantumFormat as i64),
    MnemonicEntry::new("Resource", Category::Resource as i64),
    MnemonicEntry::new("SparseColor", Category::SparseColor as i64),
    MnemonicEntry::new("Statistic", Category::Statistic as i64),
    MnemonicEntry::new("Storage", Category::Storage as i64),
    MnemonicEntry::new("Stretch", Category::Stretch as i64),
    MnemonicEntry::new("Style", Category::Style as i64),
    MnemonicEntry::new("Threshold", Category::Threshold as i64),
    MnemonicEntry::new("Type", Category::Type as i64),
    MnemonicEntry::new("Units", Category::Resolution as i64),
    MnemonicEntry::new("Undefined", Category::Undefined as i64).hidden(),
    MnemonicEntry::new("Validate", Category::Validate as i64),
    MnemonicEntry::new("VirtualPixel", Category::VirtualPixel as i64),
];

pub(crate) static LOG_EVENT: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("All", 0x7fff7fff),
    MnemonicEntry::new("Accelerate", 1),
    MnemonicEntry::new("Annotate", 2),
    MnemonicEntry::new("Blob", 4),
    MnemonicEntry::new("Cache", 8),
    MnemonicEntry::new("Coder", 0x10),
    MnemonicEntry::new("Configure", 0x20),
    MnemonicEntry::new("Deprecate", 0x40),
    MnemonicEntry::new("Draw", 0x80),
    MnemonicEntry::new("Exception", 0x100),
    MnemonicEntry::new("Locale", 0x400),
    MnemonicEntry::new("Module", 0x800),
    MnemonicEntry::new("None", 0),
    MnemonicEntry::new("Pixel", 0x1000),
    MnemonicEntry::new("Policy", 0x2000),
    MnemonicEntry::new("Resource", 0x4000),
    MnemonicEntry::new("Trace", 0x8000),
    MnemonicEntry::new("Transform", 0x10000),
    MnemonicEntry::new("User", 0x20000),
    MnemonicEntry::new("Wand", 0x40000),
    MnemonicEntry::new("X11", 0x80000),
];

pub(crate) static METRIC: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("AE", 1),
    MnemonicEntry::new("Fuzz", 2),
    MnemonicEntry::new("MAE", 3),
    MnemonicEntry::new("MEPP", 4),
    MnemonicEntry::new("MSE", 5),
    MnemonicEntry::new("NCC", 6),
    MnemonicEntry::new("PAE", 7),
    MnemonicEntry::new("PSNR", 8),
    MnemonicEntry::new("RMSE", 9),
];

pub(crate) static METHOD: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("FillToBorder", 1),
    MnemonicEntry::new("Floodfill", 2),
    MnemonicEntry::new("Point", 3),
    MnemonicEntry::new("Replace", 4),
    MnemonicEntry::new("Reset", 5),
];

pub(crate) static MODE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Concatenate", 1),
    MnemonicEntry::new("Frame", 2),
    MnemonicEntry::new("Unframe", 3),
];

pub(crate) static MORPHOLOGY: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Correlate", 1),
    MnemonicEntry::new("Convolve", 2),
    MnemonicEntry::new("Dilate", 3),
    MnemonicEntry::new("Erode", 4),
    MnemonicEntry::new("Close", 5),
    MnemonicEntry::new("Open", 6),
    MnemonicEntry::new("DilateIntensity", 7),
    MnemonicEntry::new("ErodeIntensity", 8),
    MnemonicEntry::new("CloseIntensity", 9),
    MnemonicEntry::new("OpenIntensity", 10),
    MnemonicEntry::new("DilateI", 7),
    MnemonicEntry::new("ErodeI", 8),
    MnemonicEntry::new("CloseI", 9),
    MnemonicEntry::new("OpenI", 10),
    MnemonicEntry::new("Smooth", 11),
    MnemonicEntry::new("EdgeOut", 12),
    MnemonicEntry::new("EdgeIn", 13),
    MnemonicEntry::new("Edge", 14),
    MnemonicEntry::new("TopHat", 15),
    MnemonicEntry::new("BottomHat", 16),
    MnemonicEntry::new("Hmt", 17),
    MnemonicEntry::new("HitNMiss", 17),
    MnemonicEntry::new("HitAndMiss", 17),
    MnemonicEntry::new("Thinning", 18),
    MnemonicEntry::new("Thicken", 19),
    MnemonicEntry::new("Distance", 20),
    MnemonicEntry::new("IterativeDistance", 21),
    MnemonicEntry::new("Voronoi", 22).hidden(),
];

pub(crate) static NOISE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Gaussian", 1),
    MnemonicEntry::new("Impulse", 2),
    MnemonicEntry::new("Laplacian", 3),
    MnemonicEntry::new("Multiplicative", 4),
    MnemonicEntry::new("Poisson", 5),
    MnemonicEntry::new("Random", 6),
    MnemonicEntry::new("Uniform", 7),
];

pub(crate) static ORIENTATION: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("TopLeft", 1),
    MnemonicEntry::new("TopRight", 2),
    MnemonicEntry::new("BottomRight", 3),
    MnemonicEntry::new("BottomLeft", 4),
    MnemonicEntry::new("LeftTop", 5),
    MnemonicEntry::new("RightTop", 6),
    MnemonicEntry::new("RightBottom", 7),
    MnemonicEntry::new("LeftBottom", 8),
];

pub(crate) static PIXEL_CHANNEL: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0),
    MnemonicEntry::new("A", 4),
    MnemonicEntry::new("Alpha", 4),
    MnemonicEntry::new("B", 2),
    MnemonicEntry::new("Bk", 3),
    MnemonicEntry::new("Black", 3),
    MnemonicEntry::new("Blue", 2),
    MnemonicEntry::new("Cb", 1),
    MnemonicEntry::new("Composite", 32),
    MnemonicEntry::new("C", 0),
    MnemonicEntry::new("Cr", 2),
    MnemonicEntry::new("Cyan", 0),
    MnemonicEntry::new("Gray", 0),
    MnemonicEntry::new("G", 1),
    MnemonicEntry::new("Green", 1),
    MnemonicEntry::new("Index", 5),
    MnemonicEntry::new("Intensity", 32),
    MnemonicEntry::new("K", 3),
    MnemonicEntry::new("M", 1),
    MnemonicEntry::new("Magenta", 1),
    MnemonicEntry::new("Mask", 6),
    MnemonicEntry::new("R", 0),
    MnemonicEntry::new("Red", 0),
    MnemonicEntry::new("Sync", 33),
    MnemonicEntry::new("Y", 2),
    MnemonicEntry::new("Yellow", 2),
];

pub(crate) static PIXEL_INTENSITY: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Average", 1).hidden(),
    MnemonicEntry::new("Brightness", 2).hidden(),
    MnemonicEntry::new("Lightness", 3).hidden(),
    MnemonicEntry::new("Rec601Luma", 4).hidden(),
    MnemonicEntry::new("Rec601Luminance", 5).hidden(),
    MnemonicEntry::new("Rec709Luma", 6).hidden(),
    MnemonicEntry::new("Rec709Luminance", 7).hidden(),
    MnemonicEntry::new("RMS", 8).hidden(),
];

pub(crate) static PIXEL_MASK: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("R", 1),
    MnemonicEntry::new("Read", 1),
    MnemonicEntry::new("W", 2),
    MnemonicEntry::new("Write", 2),
];

pub(crate) static PIXEL_TRAIT: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Blend", 1),
    MnemonicEntry::new("Copy", 2),
    MnemonicEntry::new("Update", 3),
];

pub(crate) static POLICY_DOMAIN: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Coder", 1),
    MnemonicEntry::new("Delegate", 2),
    MnemonicEntry::new("Filter", 3),
    MnemonicEntry::new("Path", 4),
    MnemonicEntry::new("Resource", 5),
    MnemonicEntry::new("System", 6),
];

pub(crate) static POLICY_RIGHTS: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("None", 0),
    MnemonicEntry::new("Read", 1),
    MnemonicEntry::new("Write", 2),
    MnemonicEntry::new("Execute", 4),
];

pub(crate) static PREVIEW: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("AddNoise", 1),
    MnemonicEntry::new("Blur", 2),
    MnemonicEntry::new("Brightness", 3),
    MnemonicEntry::new("Charcoal", 4),
    MnemonicEntry::new("Despeckle", 5),
    MnemonicEntry::new("Dull", 6),
    MnemonicEntry::new("EdgeDetect", 7),
    MnemonicEntry::new("Gamma", 8),
    MnemonicEntry::new("Grayscale", 9),
    MnemonicEntry::new("Hue", 10),
    MnemonicEntry::new("Implode", 11),
    MnemonicEntry::new("JPEG", 12),
    MnemonicEntry::new("OilPaint", 13),
    MnemonicEntry::new("Quantize", 14),
    MnemonicEntry::new("Raise", 15),
    MnemonicEntry::new("ReduceNoise", 16),
    MnemonicEntry::new("Roll", 17),
    MnemonicEntry::new("Rotate", 18),
    MnemonicEntry::new("Saturation", 19),
    MnemonicEntry::new("Segment", 20),
    MnemonicEntry::new("Shade", 21),
    MnemonicEntry::new("Sharpen", 22),
    MnemonicEntry::new("Shear", 23),
    MnemonicEntry::new("Solarize", 24),
    MnemonicEntry::new("Spiff", 25),
    MnemonicEntry::new("Spread", 26),
    MnemonicEntry::new("Swirl", 27),
    MnemonicEntry::new("Threshold", 28),
    MnemonicEntry::new("Wave", 29),
];

pub(crate) static PRIMITIVE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Arc", 1),
    MnemonicEntry::new("Bezier", 2),
    MnemonicEntry::new("Circle", 3),
    MnemonicEntry::new("Color", 4),
    MnemonicEntry::new("Ellipse", 5),
    MnemonicEntry::new("Image", 6),
    MnemonicEntry::new("Line", 7),
    MnemonicEntry::new("Matte", 8),
    MnemonicEntry::new("Path", 9),
    MnemonicEntry::new("Point", 10),
    MnemonicEntry::new("Polygon", 11),
    MnemonicEntry::new("Polyline", 12),
    MnemonicEntry::new("Rectangle", 13),
    MnemonicEntry::new("RoundRectangle", 14),
    MnemonicEntry::new("Text", 15),
];

pub(crate) static QUANTUM_FORMAT: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("FloatingPoint", 1),
    MnemonicEntry::new("Signed", 2),
    MnemonicEntry::new("Unsigned", 3),
];

pub(crate) static RESOLUTION: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("PixelsPerInch", 1),
    MnemonicEntry::new("PixelsPerCentimeter", 2),
];

pub(crate) static RESOURCE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Area", 1),
    MnemonicEntry::new("Disk", 2),
    MnemonicEntry::new("File", 3),
    MnemonicEntry::new("Map", 4),
    MnemonicEntry::new("Memory", 5),
    MnemonicEntry::new("Thread", 6),
    MnemonicEntry::new("Time", 7),
];

pub(crate) static SPARSE_COLOR: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Barycentric", 1),
    MnemonicEntry::new("Bilinear", 2),
    MnemonicEntry::new("Inverse", 3),
    MnemonicEntry::new("Shepards", 4),
    MnemonicEntry::new("Voronoi", 5),
];

pub(crate) static STATISTIC: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Gradient", 1),
    MnemonicEntry::new("Maximum", 2),
    MnemonicEntry::new("Mean", 3),
    MnemonicEntry::new("Median", 4),
    MnemonicEntry::new("Minimum", 5),
    MnemonicEntry::new("Mode", 6),
    MnemonicEntry::new("NonPeak", 7),
    MnemonicEntry::new("StandardDeviation", 8),
];

pub(crate) static STORAGE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Char", 1),
    MnemonicEntry::new("Double", 2),
    MnemonicEntry::new("Float", 3),
    MnemonicEntry::new("Long", 4),
    MnemonicEntry::new("LongLong", 5),
    MnemonicEntry::new("Quantum", 6),
    MnemonicEntry::new("Short", 7),
];

pub(crate) static STRETCH: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Any", 1),
    MnemonicEntry::new("Condensed", 2),
    MnemonicEntry::new("Expanded", 3),
    MnemonicEntry::new("ExtraCondensed", 4),
    MnemonicEntry::new("ExtraExpanded", 5),
    MnemonicEntry::new("Normal", 6),
    MnemonicEntry::new("SemiCondensed", 7),
    MnemonicEntry::new("SemiExpanded", 8),
    MnemonicEntry::new("UltraCondensed", 9),
    MnemonicEntry::new("UltraExpanded", 10),
];

pub(crate) static STYLE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Any", 1),
    MnemonicEntry::new("Italic", 2),
    MnemonicEntry::new("Normal", 3),
    MnemonicEntry::new("Oblique", 4),
];

pub(crate) static TYPE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Bilevel", 1),
    MnemonicEntry::new("ColorSeparation", 2),
    MnemonicEntry::new("ColorSeparationAlpha", 3),
    MnemonicEntry::new("ColorSeparationMatte", 3),
    MnemonicEntry::new("Grayscale", 4),
    MnemonicEntry::new("GrayscaleAlpha", 5),
    MnemonicEntry::new("GrayscaleMatte", 5),
    MnemonicEntry::new("Optimize", 6),
    MnemonicEntry::new("Palette", 7),
    MnemonicEntry::new("PaletteBilevelAlpha", 8),
    MnemonicEntry::new("PaletteBilevelMatte", 8),
    MnemonicEntry::new("PaletteAlpha", 9),
    MnemonicEntry::new("PaletteMatte", 9),
    MnemonicEntry::new("TrueColorAlpha", 10),
    MnemonicEntry::new("TrueColorMatte", 10),
    MnemonicEntry::new("TrueColor", 11),
];

pub(crate) static VALIDATE: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("All", 0x7fffffff),
    MnemonicEntry::new("Compare", 1),
    MnemonicEntry::new("Composite", 2),
    MnemonicEntry::new("Convert", 4),
    MnemonicEntry::new("FormatsInMemory", 8),
    MnemonicEntry::new("FormatsOnDisk", 0x10),
    MnemonicEntry::new("Identify", 0x20),
    MnemonicEntry::new("ImportExport", 0x40),
    MnemonicEntry::new("Montage", 0x80),
    MnemonicEntry::new("Stream", 0x100),
    MnemonicEntry::new("None", 0),
];

pub(crate) static VIRTUAL_PIXEL: &[MnemonicEntry] = &[
    MnemonicEntry::new("Undefined", 0).hidden(),
    MnemonicEntry::new("Background", 1),
    MnemonicEntry::new("Black", 2),
    MnemonicEntry::new("Constant", 1).with_flags(F::DEPRECATE).hidden(),
    MnemonicEntry::new("CheckerTile", 3),
    MnemonicEntry::new("Dither", 4),
    MnemonicEntry::new("Edge", 5),
    MnemonicEntry::new("Gray", 6),
    MnemonicEntry::new("HorizontalTile", 7),
    MnemonicEntry::new("HorizontalTileEdge", 8),
    MnemonicEntry::new("Mirror", 9),
    MnemonicEntry::new("None", 10),
    MnemonicEntry::new("Random", 11),
    MnemonicEntry::new("Tile", 12),
    MnemonicEntry::new("Transparent", 10),
    MnemonicEntry::new("VerticalTile", 13),
    MnemonicEntry::new("VerticalTileEdge", 14),
    MnemonicEntry::new("White", 15),
];

//! Entry, flag and category definitions for the mnemonic tables.
//!
//! Every table in the registry is a slice of [`MnemonicEntry`] rows. A row
//! pairs a human-typed name with an enumerated value, an [`OptionFlags`]
//! mask describing how the option behaves in the command pipeline, and a
//! `hidden` marker that keeps the row out of listings while leaving it
//! resolvable.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Modifier bits attached to a mnemonic, orthogonal to its value.
    ///
    /// Only the command table sets most of these; enumerated tables use
    /// [`DEPRECATE`](OptionFlags::DEPRECATE) to mark historical aliases.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    #[serde(transparent)]
    pub struct OptionFlags: u32 {
        /// Setting stored on the image info.
        const IMAGE_INFO = 0x0001;
        /// Setting stored on the draw info.
        const DRAW_INFO = 0x0002;
        /// Setting stored on the quantize info.
        const QUANTIZE_INFO = 0x0004;
        /// Global, process-wide setting.
        const GLOBAL = 0x0008;
        /// Operator applied to each image independently.
        const SIMPLE_OPERATOR = 0x0010;
        /// Operator applied to the whole image list.
        const LIST_OPERATOR = 0x0020;
        /// Option handled before any image is read.
        const GENESIS = 0x0040;
        /// Option with handling outside the normal pipeline.
        const SPECIAL = 0x0080;
        /// Operator that needs no images at all.
        const NO_IMAGE_OPERATOR = 0x0100;
        /// Arguments are always percent-escape interpreted.
        const ALWAYS_INTERPRET_ARGS = 0x0200;
        /// Arguments are never percent-escape interpreted.
        const NEVER_INTERPRET_ARGS = 0x0400;
        /// Option belongs to a companion tool, not the main command.
        const NON_MAGICK = 0x1000;
        /// Option fires the pending settings into the pipeline.
        const FIRE = 0x2000;
        /// Deprecated spelling.
        const DEPRECATE = 0x4000;
        /// Replaced by another option.
        const REPLACED = 0x8000;

        /// Any of the settings bits.
        const SETTING = Self::IMAGE_INFO.bits()
            | Self::DRAW_INFO.bits()
            | Self::QUANTIZE_INFO.bits()
            | Self::GLOBAL.bits();
    }
}

/// One row of a mnemonic table.
///
/// Rows are built in `const` context so the built-in tables can live in
/// static slices:
///
/// ```
/// use magick_options_core::{MnemonicEntry, OptionFlags};
///
/// let row = MnemonicEntry::new("Welsh", 32)
///     .with_flags(OptionFlags::DEPRECATE)
///     .hidden();
/// assert!(row.hidden);
/// assert!(row.flags.contains(OptionFlags::DEPRECATE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MnemonicEntry {
    /// Mnemonic, matched case-insensitively.
    pub name: &'static str,
    /// Enumerated value, or argument count for the command table.
    pub value: i64,
    /// Behavior modifiers.
    pub flags: OptionFlags,
    /// Excluded from listings but still resolvable.
    pub hidden: bool,
}

impl MnemonicEntry {
    /// Creates a visible row with no flags.
    pub const fn new(name: &'static str, value: i64) -> Self {
        Self {
            name,
            value,
            flags: OptionFlags::empty(),
            hidden: false,
        }
    }

    /// Sets the flag bits.
    pub const fn with_flags(mut self, flags: OptionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Marks the row as hidden from listings.
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns `true` for the command-table miss sentinel.
    pub fn is_undefined(&self) -> bool {
        self.name.is_empty()
    }
}

/// Result of a successful name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
    /// Position of the matching row in its table.
    pub index: usize,
    /// The matching row.
    pub entry: &'a MnemonicEntry,
}

impl Lookup<'_> {
    pub fn value(&self) -> i64 {
        self.entry.value
    }

    pub fn flags(&self) -> OptionFlags {
        self.entry.flags
    }
}

macro_rules! categories {
    ($($variant:ident = $value:expr),+ $(,)?) => {
        /// Identifier of a mnemonic table.
        ///
        /// The discriminants are the values stored in the `List` table, so a
        /// category typed by a user resolves like any other mnemonic. Some
        /// categories are listable names without a mnemonic table behind them
        /// (for example [`Category::Font`]); resolving their table fails.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum Category {
            $($variant = $value),+
        }

        impl Category {
            /// Every category, in discriminant order.
            pub const ALL: &'static [Category] = &[$(Category::$variant),+];

            /// Maps a `List` table value back to its category.
            ///
            /// ```
            /// use magick_options_core::Category;
            ///
            /// assert_eq!(Category::from_value(Category::Filter as i64), Some(Category::Filter));
            /// assert_eq!(Category::from_value(10_000), None);
            /// ```
            pub fn from_value(value: i64) -> Option<Self> {
                match value {
                    $(v if v == $value => Some(Category::$variant),)+
                    _ => None,
                }
            }

            /// Rust-side identifier of the category.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Category::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

categories! {
    Undefined = -1,
    Align = 0,
    AlphaChannel = 1,
    Boolean = 2,
    Cache = 3,
    Channel = 4,
    Class = 5,
    ClipPath = 6,
    Coder = 7,
    Color = 8,
    Colorspace = 9,
    Command = 10,
    Compose = 11,
    Compress = 12,
    Configure = 13,
    DataType = 14,
    Debug = 15,
    Decorate = 16,
    Delegate = 17,
    Direction = 18,
    Dispose = 19,
    Distort = 20,
    Dither = 21,
    Endian = 22,
    Evaluate = 23,
    FillRule = 24,
    Filter = 25,
    Font = 26,
    Format = 27,
    Function = 28,
    Gravity = 29,
    Intent = 30,
    Interlace = 31,
    Interpolate = 32,
    Kernel = 33,
    Layer = 34,
    LineCap = 35,
    LineJoin = 36,
    List = 37,
    Locale = 38,
    LogEvent = 39,
    Log = 40,
    Magic = 41,
    Method = 42,
    Metric = 43,
    Mime = 44,
    Mode = 45,
    Morphology = 46,
    Module = 47,
    Noise = 48,
    Orientation = 49,
    PixelChannel = 50,
    PixelIntensity = 51,
    PixelMask = 52,
    PixelTrait = 53,
    Policy = 54,
    PolicyDomain = 55,
    PolicyRights = 56,
    Preview = 57,
    Primitive = 58,
    QuantumFormat = 59,
    Resolution = 60,
    Resource = 61,
    SparseColor = 62,
    Statistic = 63,
    Storage = 64,
    Stretch = 65,
    Style = 66,
    Threshold = 67,
    Type = 68,
    Validate = 69,
    VirtualPixel = 70,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

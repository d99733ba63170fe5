//! Pre-baked example output for the simulated "Run Code" action.
//!
//! This table is keyed by the same ids as the practical catalog but is
//! maintained independently and is not total: a practical without a bundle
//! is valid and resolves to [`OutputLookup::Empty`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use super::id::PracticalId;

/// One output image and its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputEntry {
    /// Opaque locator of the image. Never fetched or validated here.
    pub image_ref: &'static str,
    pub caption: &'static str,
}

/// The ordered set of output images for one practical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputBundle {
    pub title: &'static str,
    pub images: &'static [OutputEntry],
}

/// Result of querying the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLookup {
    /// A bundle is registered for the practical.
    Ready(&'static OutputBundle),
    /// No bundle is registered. Consumers must say so explicitly.
    Empty,
}

impl OutputLookup {
    /// The bundle, if any.
    pub fn bundle(self) -> Option<&'static OutputBundle> {
        match self {
            OutputLookup::Ready(bundle) => Some(bundle),
            OutputLookup::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, OutputLookup::Empty)
    }
}

/// Message shown in place of the image list when no bundle exists.
pub const NO_OUTPUT_MESSAGE: &str = "No output available for this practical";

const ORIGINAL_PUFFIN: OutputEntry = OutputEntry {
    image_ref: "https://i.imgur.com/5JmB7xF.png",
    caption: "Original image",
};

// Practical 8 reads its input from a machine-specific absolute path, so it
// has no reproducible output and is deliberately absent.
const OUTPUTS: &[(u8, OutputBundle)] = &[
    (
        1,
        OutputBundle {
            title: "Basic Image Operations",
            images: &[OutputEntry {
                image_ref: "https://i.imgur.com/zOcJbW2.png",
                caption: "Original and processed images showing various basic operations",
            }],
        },
    ),
    (
        2,
        OutputBundle {
            title: "Image Quantization",
            images: &[
                OutputEntry {
                    image_ref: "https://i.imgur.com/wUQJNH2.png",
                    caption: "Original image",
                },
                OutputEntry {
                    image_ref: "https://i.imgur.com/5JmB7xF.png",
                    caption: "Quantized image with fewer intensity levels",
                },
            ],
        },
    ),
    (
        3,
        OutputBundle {
            title: "Linear Convolution",
            images: &[OutputEntry {
                image_ref: "https://i.imgur.com/cXnIVVu.png",
                caption: "Plot of linear convolution result",
            }],
        },
    ),
    (
        4,
        OutputBundle {
            title: "Circular Convolution",
            images: &[OutputEntry {
                image_ref: "https://i.imgur.com/kFjpTdZ.png",
                caption: "Plot of circular convolution result",
            }],
        },
    ),
    (
        5,
        OutputBundle {
            title: "FFT and IFFT",
            images: &[OutputEntry {
                image_ref: "https://i.imgur.com/L4KmPVr.png",
                caption: "Plot of FFT-based convolution result",
            }],
        },
    ),
    (
        6,
        OutputBundle {
            title: "Low Pass Filtering",
            images: &[
                ORIGINAL_PUFFIN,
                OutputEntry {
                    image_ref: "https://miro.medium.com/v2/resize:fit:1400/1*GXpwWN8--KtM3GM2dxxntQ.png",
                    caption: "Low pass filtered image showing smoothing effect",
                },
            ],
        },
    ),
    (
        7,
        OutputBundle {
            title: "High Pass Filtering",
            images: &[
                ORIGINAL_PUFFIN,
                OutputEntry {
                    image_ref: "https://i.sstatic.net/M24re.png",
                    caption: "High pass filtered image showing edge enhancement",
                },
            ],
        },
    ),
    (
        9,
        OutputBundle {
            title: "Morphological Image Operations",
            images: &[
                ORIGINAL_PUFFIN,
                OutputEntry {
                    image_ref: "https://i.imgur.com/QhY1dFn.png",
                    caption: "Dilation (Rectangular)",
                },
                OutputEntry {
                    image_ref: "https://i.imgur.com/pzGCQfS.png",
                    caption: "Erosion (Rectangular)",
                },
            ],
        },
    ),
    (
        10,
        OutputBundle {
            title: "Edge Detection",
            images: &[
                OutputEntry {
                    image_ref: "https://i.imgur.com/5JmB7xF.png",
                    caption: "Original grayscale image",
                },
                OutputEntry {
                    image_ref: "https://jmlb.github.io/images/20180630/img_02.png",
                    caption: "Sobel edge detection result showing vertical edges",
                },
                OutputEntry {
                    image_ref: "https://ars.els-cdn.com/content/image/1-s2.0-S1746809417301751-gr8.jpg",
                    caption: "Different edge detection methods comparison",
                },
            ],
        },
    ),
];

static OUTPUT_TABLE: LazyLock<BTreeMap<PracticalId, OutputBundle>> = LazyLock::new(|| {
    OUTPUTS
        .iter()
        .filter_map(|(number, bundle)| PracticalId::new(*number).map(|id| (id, *bundle)))
        .collect()
});

/// Look up the example output for a practical.
pub fn resolve_outputs(id: PracticalId) -> OutputLookup {
    match OUTPUT_TABLE.get(&id) {
        Some(bundle) => OutputLookup::Ready(bundle),
        None => OutputLookup::Empty,
    }
}

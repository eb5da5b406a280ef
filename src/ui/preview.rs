//! Thumbnail display via terminal graphics protocols (Kitty, Sixel, iTerm2, halfblocks).

use log::{debug, warn};
use ratatui::layout::Rect;
use ratatui::Frame;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::Protocol;
use ratatui_image::{Image, Resize};

use crate::thumbnail::Thumbnail;

/// Font size assumed when the terminal cannot be queried
const FALLBACK_FONT_SIZE: (u16, u16) = (8, 16);

/// Holds the encoded form of the current thumbnail.
///
/// Encoding happens once per thumbnail and area, so redraws are cheap.
pub struct ImagePane {
    picker: Picker,
    encoded: Option<Encoded>,
}

struct Encoded {
    url: String,
    area: Rect,
    protocol: Protocol,
}

impl ImagePane {
    /// Must be called after the terminal entered raw mode so the query can be answered.
    pub fn new() -> Self {
        let picker = Picker::from_query_stdio().unwrap_or_else(|e| {
            debug!("Terminal graphics query failed ({:?}), using halfblocks", e);
            Picker::from_fontsize(FALLBACK_FONT_SIZE)
        });
        Self::with_picker(picker)
    }

    pub fn with_picker(picker: Picker) -> Self {
        Self {
            picker,
            encoded: None,
        }
    }

    fn sync(&mut self, thumbnail: Option<&Thumbnail>, area: Rect) {
        let Some(thumbnail) = thumbnail else {
            self.encoded = None;
            return;
        };
        if let Some(encoded) = &self.encoded {
            if encoded.url == thumbnail.url && encoded.area == area {
                return;
            }
        }

        self.encoded = match self
            .picker
            .new_protocol(thumbnail.image.clone(), area, Resize::Fit(None))
        {
            Ok(protocol) => Some(Encoded {
                url: thumbnail.url.clone(),
                area,
                protocol,
            }),
            Err(e) => {
                warn!("Could not encode thumbnail {}: {:?}", thumbnail.url, e);
                None
            }
        };
    }

    /// Draw the thumbnail centred in `area`, or nothing when there is none.
    pub fn render(&mut self, frame: &mut Frame, thumbnail: Option<&Thumbnail>, area: Rect) {
        self.sync(thumbnail, area);
        if let Some(encoded) = &self.encoded {
            let image_area = encoded.protocol.area();
            let centred = center_rect(image_area, area);
            frame.render_widget(Image::new(&encoded.protocol), centred);
        }
    }
}

impl Default for ImagePane {
    fn default() -> Self {
        Self::new()
    }
}

/// Place a rect of `inner`'s size in the middle of `outer`, clipped to it.
pub(crate) fn center_rect(inner: Rect, outer: Rect) -> Rect {
    let width = inner.width.min(outer.width);
    let height = inner.height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}

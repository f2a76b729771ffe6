// Embedded metadata writer for image files
//
// The destination is a byte copy of the source; only the metadata segment is
// rewritten, so pixel data is never re-encoded.

use std::path::Path;

use chrono::{Local, TimeZone};
use little_exif::exif_tag::ExifTag;
use little_exif::ifd::ExifTagGroup;
use little_exif::metadata::Metadata;
use little_exif::rational::uR64;

use crate::constants::{EXIF_DATETIME_FORMAT, TAG_XP_COMMENT, TAG_XP_TITLE};
use crate::error::{ExifMirrorError, Result};
use crate::geo::{latitude_to_sexagesimal, longitude_to_sexagesimal, SexagesimalAngle};
use crate::metadata::NormalizedMetadata;

/// Write `meta` into a copy of `source` at `dest`.
/// Existing embedded tags survive unless explicitly overwritten; a source
/// with no parseable metadata block starts from an empty one.
pub fn write_image_metadata(source: &Path, dest: &Path, meta: &NormalizedMetadata) -> Result<()> {
    super::copy_to_destination(source, dest)?;

    let mut exif = match Metadata::new_from_path(dest) {
        Ok(existing) => existing,
        Err(_) => Metadata::new(),
    };

    apply_tags(&mut exif, meta, dest);

    if let Err(e) = exif.write_to_file(dest) {
        super::discard_destination(dest);
        return Err(ExifMirrorError::Write(format!(
            "failed to embed metadata into {}: {}",
            dest.display(),
            e
        )));
    }

    Ok(())
}

fn apply_tags(exif: &mut Metadata, meta: &NormalizedMetadata, dest: &Path) {
    if let Some(ts) = meta.taken_timestamp {
        // Naive local timestamp, per the embedded-metadata convention
        match Local.timestamp_opt(ts, 0).earliest() {
            Some(dt) => {
                let stamp = dt.format(EXIF_DATETIME_FORMAT).to_string();
                exif.set_tag(ExifTag::ModifyDate(stamp.clone()));
                exif.set_tag(ExifTag::DateTimeOriginal(stamp.clone()));
                exif.set_tag(ExifTag::CreateDate(stamp));
            }
            None => {
                log::warn!(
                    "Timestamp {} has no local-time representation, leaving date tags of {} unset",
                    ts,
                    dest.display()
                );
            }
        }
    }

    if let Some(ref title) = meta.title {
        exif.set_tag(ExifTag::UnknownINT8U(
            encode_utf16le(title),
            TAG_XP_TITLE,
            ExifTagGroup::GENERIC,
        ));
    }

    if let Some(ref description) = meta.description {
        exif.set_tag(ExifTag::ImageDescription(description.clone()));
    }

    if let Some(people) = meta.joined_people() {
        exif.set_tag(ExifTag::UnknownINT8U(
            encode_utf16le(&people),
            TAG_XP_COMMENT,
            ExifTagGroup::GENERIC,
        ));
    }

    if let Some(geo) = meta.geo {
        let lat = latitude_to_sexagesimal(geo.latitude);
        let lon = longitude_to_sexagesimal(geo.longitude);
        exif.set_tag(ExifTag::GPSLatitudeRef(lat.hemisphere.to_string()));
        exif.set_tag(ExifTag::GPSLatitude(to_rationals(&lat)));
        exif.set_tag(ExifTag::GPSLongitudeRef(lon.hemisphere.to_string()));
        exif.set_tag(ExifTag::GPSLongitude(to_rationals(&lon)));
    }
}

fn to_rationals(angle: &SexagesimalAngle) -> Vec<uR64> {
    vec![
        uR64 {
            nominator: angle.degrees,
            denominator: 1,
        },
        uR64 {
            nominator: angle.minutes,
            denominator: 1,
        },
        uR64 {
            nominator: angle.seconds_num,
            denominator: angle.seconds_den,
        },
    ]
}

/// Windows Explorer tags (XPTitle, XPComment) store wide-character text.
fn encode_utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

//! Raw tag keys, in `Group:Tag` form as emitted by `exiftool -G1`.

// Exposure / optics
pub const APERTURE: &str = "Composite:Aperture";
pub const APPROXIMATE_FOCUS_DISTANCE: &str = "XMP-aux:ApproximateFocusDistance";
pub const EXPOSURE_TIME: &str = "ExifIFD:ExposureTime";
pub const FOCAL_LENGTH: &str = "ExifIFD:FocalLength";
pub const ISO: &str = "ExifIFD:ISO";
pub const LENS: &str = "ExifIFD:LensModel";
pub const LENS_ID: &str = "Composite:LensID";

// Device
pub const MAKE: &str = "IFD0:Make";
pub const MAKE_QUICKTIME: &str = "QuickTime:Make";
pub const MODEL: &str = "IFD0:Model";
pub const MODEL_QUICKTIME: &str = "QuickTime:Model";
pub const SOFTWARE: &str = "IFD0:Software";

// Image properties
pub const IMAGE_WIDTH: &str = "File:ImageWidth";
pub const IMAGE_HEIGHT: &str = "File:ImageHeight";
pub const IMAGE_SIZE: &str = "Composite:ImageSize";
pub const ROTATION: &str = "Composite:Rotation";
pub const X_RESOLUTION: &str = "IFD0:XResolution";
pub const Y_RESOLUTION: &str = "IFD0:YResolution";
pub const COLOR_SPACE: &str = "ExifIFD:ColorSpace";
pub const ORIENTATION: &str = "IFD0:Orientation";

// File
pub const MIME_TYPE: &str = "File:MIMEType";
pub const FILE_SIZE: &str = "System:FileSize";
pub const FILE_NAME: &str = "System:FileName";

// Descriptive
pub const TITLE_XMP: &str = "XMP-dc:Title";
pub const TITLE: &str = "IPTC:ObjectName";
pub const CAPTION: &str = "XMP-acdsee:Caption";
pub const CAPTION_ABSTRACT: &str = "IPTC:Caption-Abstract";
pub const DESCRIPTION_XMP: &str = "XMP-dc:Description";
pub const DESCRIPTION: &str = "IFD0:ImageDescription";
pub const HEADLINE: &str = "IPTC:Headline";
pub const KEYWORDS: &str = "IPTC:Keywords";
pub const SUBJECT: &str = "XMP-dc:Subject";

// Rights / attribution
pub const ARTIST: &str = "IFD0:Artist";
pub const COPYRIGHT_IPTC: &str = "IPTC:CopyrightNotice";
pub const COPYRIGHT: &str = "IFD0:Copyright";
pub const CREDIT: &str = "IPTC:Credit";
pub const SOURCE: &str = "IPTC:Source";
pub const JOB_TITLE: &str = "IPTC:By-lineTitle";

// Location names
pub const CITY_XMP: &str = "XMP-photoshop:City";
pub const CITY: &str = "IPTC:City";
pub const SUBLOCATION_XMP: &str = "XMP-iptcCore:Location";
pub const SUBLOCATION: &str = "IPTC:Sub-location";
pub const STATE_XMP: &str = "XMP-photoshop:State";
pub const STATE: &str = "IPTC:Province-State";
pub const COUNTRY_XMP: &str = "XMP-photoshop:Country";
pub const COUNTRY: &str = "IPTC:Country-PrimaryLocationName";

// GPS
pub const GPS_LATITUDE: &str = "GPS:GPSLatitude";
pub const GPS_LATITUDE_REF: &str = "GPS:GPSLatitudeRef";
pub const GPS_LONGITUDE: &str = "GPS:GPSLongitude";
pub const GPS_LONGITUDE_REF: &str = "GPS:GPSLongitudeRef";
pub const GPS_LATITUDE_QUICKTIME: &str = "Composite:GPSLatitude";
pub const GPS_LONGITUDE_QUICKTIME: &str = "Composite:GPSLongitude";
pub const GPS_ALTITUDE: &str = "GPS:GPSAltitude";
pub const GPS_ALTITUDE_REF: &str = "GPS:GPSAltitudeRef";
pub const GPS_ALTITUDE_QUICKTIME: &str = "Composite:GPSAltitude";
pub const GPS_ALTITUDE_REF_QUICKTIME: &str = "Composite:GPSAltitudeRef";
pub const GPS_IMG_DIRECTION: &str = "GPS:GPSImgDirection";

// Capture time
pub const DATE_TIME_ORIGINAL: &str = "ExifIFD:DateTimeOriginal";
pub const DATE_TIME_ORIGINAL_QUICKTIME: &str = "QuickTime:CreationDate";
pub const DATE_TIME_ORIGINAL_AVI: &str = "RIFF:DateTimeOriginal";
pub const DATE_TIME_ORIGINAL_WEBM: &str = "Matroska:DateTimeOriginal";
pub const DATE_TIME_ORIGINAL_OGG: &str = "Theora:CreationTime";
pub const DATE_TIME_ORIGINAL_WMV: &str = "ASF:CreationDate";
pub const DATE_TIME_ORIGINAL_PNG: &str = "PNG:CreationTime";
pub const DATE_TIME_ORIGINAL_APPLE: &str = "Keys:CreationDate";
pub const OFFSET_TIME_ORIGINAL: &str = "ExifIFD:OffsetTimeOriginal";
pub const OFFSET_TIME: &str = "ExifIFD:OffsetTime";

// Live photos / motion photos
pub const CONTENT_IDENTIFIER: &str = "MakerNotes:ContentIdentifier";
pub const CONTENT_IDENTIFIER_KEYS: &str = "Keys:ContentIdentifier";
pub const CONTENT_IDENTIFIER_QUICKTIME: &str = "QuickTime:ContentIdentifier";
pub const MEDIA_GROUP_UUID: &str = "MakerNotes:MediaGroupUUID";
pub const MICRO_VIDEO_OFFSET: &str = "XMP-GCamera:MicroVideoOffset";

// Video timing
pub const FRAMERATE: &str = "MPEG:FrameRate";
pub const FRAMERATE_QUICKTIME_1: &str = "Track1:VideoFrameRate";
pub const FRAMERATE_QUICKTIME_2: &str = "Track2:VideoFrameRate";
pub const FRAMERATE_QUICKTIME_3: &str = "Track3:VideoFrameRate";
pub const FRAMERATE_AVI: &str = "RIFF:VideoFrameRate";
pub const FRAMERATE_OGG: &str = "Theora:FrameRate";
pub const DURATION: &str = "Composite:Duration";
pub const DURATION_QUICKTIME: &str = "QuickTime:Duration";
pub const DURATION_WEBM: &str = "Matroska:Duration";
pub const DURATION_WMV: &str = "ASF:SendDuration";

/// Container-format timestamp keys, least specific first. The last one that
/// parses wins; [`DATE_TIME_ORIGINAL_APPLE`] is consulted after all of them.
pub const CREATION_DATE_KEYS: &[&str] = &[
    DATE_TIME_ORIGINAL_PNG,
    DATE_TIME_ORIGINAL_WMV,
    DATE_TIME_ORIGINAL_OGG,
    DATE_TIME_ORIGINAL_WEBM,
    DATE_TIME_ORIGINAL_AVI,
    DATE_TIME_ORIGINAL_QUICKTIME,
    DATE_TIME_ORIGINAL,
];

/// Offset tags, most specific first.
pub const OFFSET_KEYS: &[&str] = &[OFFSET_TIME_ORIGINAL, OFFSET_TIME];

/// Raw keys consumed by the composite rules rather than the rule table.
pub const COMPOSITE_KEYS: &[&str] = &[
    IMAGE_SIZE,
    ROTATION,
    KEYWORDS,
    SUBJECT,
    GPS_LATITUDE,
    GPS_LATITUDE_REF,
    GPS_LONGITUDE,
    GPS_LONGITUDE_REF,
    GPS_LATITUDE_QUICKTIME,
    GPS_LONGITUDE_QUICKTIME,
    GPS_ALTITUDE,
    GPS_ALTITUDE_REF,
    GPS_ALTITUDE_QUICKTIME,
    GPS_ALTITUDE_REF_QUICKTIME,
    DATE_TIME_ORIGINAL,
    DATE_TIME_ORIGINAL_QUICKTIME,
    DATE_TIME_ORIGINAL_AVI,
    DATE_TIME_ORIGINAL_WEBM,
    DATE_TIME_ORIGINAL_OGG,
    DATE_TIME_ORIGINAL_WMV,
    DATE_TIME_ORIGINAL_PNG,
    DATE_TIME_ORIGINAL_APPLE,
    OFFSET_TIME_ORIGINAL,
    OFFSET_TIME,
];

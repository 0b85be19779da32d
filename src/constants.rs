/// Endpoint of the route search service
pub const ROUTE_API: &str = "/api/route";

/// GSI standard map tiles
pub const DEFAULT_TILE_URL: &str = "https://cyberjapandata.gsi.go.jp/xyz/std/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "<a href='https://maps.gsi.go.jp/development/ichiran.html' target='_blank'>地理院タイル</a>";
pub const DEFAULT_MIN_ZOOM: f64 = 5.0;
pub const DEFAULT_MAX_ZOOM: f64 = 18.0;

/// Initial view: Tokyo Station
pub const DEFAULT_CENTER: (f64, f64) = (35.681_236, 139.767_125);
pub const DEFAULT_ZOOM: f64 = 11.0;

pub const LINE_WEIGHT: f64 = 4.0;
pub const LINE_OPACITY: f64 = 0.8;

// Double stroke: a wide opaque casing under a thinner colored line
pub const CASING_WEIGHT: f64 = 6.0;
pub const CASING_OPACITY: f64 = 1.0;
pub const INNER_LINE_WEIGHT: f64 = 3.0;
pub const INNER_LINE_OPACITY: f64 = 0.8;

/// Message shown when a route request does not succeed
pub const ROUTE_FETCH_FAILED: &str = "経路の取得に失敗しました";

//! Kartenausschnitt für Pan und Zoom über Breite/Länge.
//!
//! Einfache äquirektanguläre Abbildung: eine Zoomstufe verdoppelt die
//! Pixel pro Grad, beide Achsen verwenden denselben Maßstab.

use super::GeoPoint;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Kachelgröße in Pixeln, aus der sich der Maßstab je Zoomstufe ableitet.
pub const TILE_SIZE_PX: f64 = 256.0;

/// Rechteckiger Bereich, auf den das Kartenzentrum begrenzt wird.
///
/// Beim Deserialisieren werden die Ecken wie in [`GeoBounds::new`] sortiert;
/// nicht-endliche Koordinaten sind ein Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoBounds")]
pub struct GeoBounds {
    /// Südwestliche Ecke
    pub south_west: GeoPoint,
    /// Nordöstliche Ecke
    pub north_east: GeoPoint,
}

/// Ungeprüfte Ecken, wie sie in der TOML-Datei stehen.
#[derive(Deserialize)]
struct RawGeoBounds {
    south_west: GeoPoint,
    north_east: GeoPoint,
}

impl TryFrom<RawGeoBounds> for GeoBounds {
    type Error = String;

    fn try_from(raw: RawGeoBounds) -> Result<Self, Self::Error> {
        let corners = [raw.south_west, raw.north_east];
        if corners.iter().any(|c| !c.lat.is_finite() || !c.lng.is_finite()) {
            return Err("map_bounds enthält nicht-endliche Koordinaten".to_string());
        }
        Ok(Self::new(raw.south_west, raw.north_east))
    }
}

impl GeoBounds {
    /// Erstellt einen Bereich aus zwei Ecken (Reihenfolge egal).
    pub fn new(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            south_west: GeoPoint::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: GeoPoint::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Prüft, ob `point` innerhalb liegt (Ränder inklusive).
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }

    /// Zieht `point` auf den nächsten Punkt innerhalb des Bereichs.
    pub fn clamp(&self, point: GeoPoint) -> GeoPoint {
        GeoPoint::new(
            point.lat.clamp(self.south_west.lat, self.north_east.lat),
            point.lng.clamp(self.south_west.lng, self.north_east.lng),
        )
    }
}

/// Aktueller Kartenausschnitt
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// Kartenmitte
    pub center: GeoPoint,
    /// Zoomstufe (14 = Stadtteil, 20 = Gebäude)
    pub zoom: f64,
    home_center: GeoPoint,
    home_zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    bounds: Option<GeoBounds>,
}

impl MapView {
    /// Erstellt einen Ausschnitt mit Startposition, Zoomgrenzen und optionaler Begrenzung.
    pub fn new(
        home_center: GeoPoint,
        home_zoom: f64,
        min_zoom: f64,
        max_zoom: f64,
        bounds: Option<GeoBounds>,
    ) -> Self {
        let (min_zoom, max_zoom) = (min_zoom.min(max_zoom), min_zoom.max(max_zoom));
        let home_center = bounds.map_or(home_center, |b| b.clamp(home_center));
        let home_zoom = home_zoom.clamp(min_zoom, max_zoom);
        Self {
            center: home_center,
            zoom: home_zoom,
            home_center,
            home_zoom,
            min_zoom,
            max_zoom,
            bounds,
        }
    }

    /// Setzt Mitte und Zoom auf die Startwerte zurück.
    pub fn reset(&mut self) {
        self.center = self.home_center;
        self.zoom = self.home_zoom;
    }

    /// Pixel pro Grad bei aktuellem Zoom.
    pub fn pixels_per_degree(&self) -> f64 {
        TILE_SIZE_PX * 2f64.powf(self.zoom) / 360.0
    }

    /// Konvertiert Viewport-Pixel (Ursprung oben links) in Breite/Länge.
    pub fn screen_to_geo(&self, screen_pos: DVec2, viewport_size: DVec2) -> GeoPoint {
        let offset = (screen_pos - viewport_size * 0.5) / self.pixels_per_degree();
        // Bildschirm-Y wächst nach unten, Breite nach Norden
        GeoPoint::new(self.center.lat - offset.y, self.center.lng + offset.x)
    }

    /// Konvertiert Breite/Länge in Viewport-Pixel.
    pub fn geo_to_screen(&self, point: GeoPoint, viewport_size: DVec2) -> DVec2 {
        let ppd = self.pixels_per_degree();
        DVec2::new(
            (point.lng - self.center.lng) * ppd,
            (self.center.lat - point.lat) * ppd,
        ) + viewport_size * 0.5
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Karte folgt dem Zeiger).
    pub fn pan_pixels(&mut self, delta_px: DVec2) {
        let delta_deg = delta_px / self.pixels_per_degree();
        self.set_center(GeoPoint::new(
            self.center.lat + delta_deg.y,
            self.center.lng - delta_deg.x,
        ));
    }

    /// Ändert den Zoom um `steps` Stufen.
    pub fn zoom_by(&mut self, steps: f64) {
        self.zoom = (self.zoom + steps).clamp(self.min_zoom, self.max_zoom);
    }

    /// Zoomt so, dass die Position unter `focus_px` stehen bleibt.
    pub fn zoom_towards(&mut self, steps: f64, focus_px: DVec2, viewport_size: DVec2) {
        let anchor = self.screen_to_geo(focus_px, viewport_size);
        self.zoom_by(steps);
        let drifted = self.screen_to_geo(focus_px, viewport_size);
        self.set_center(GeoPoint::new(
            self.center.lat + (anchor.lat - drifted.lat),
            self.center.lng + (anchor.lng - drifted.lng),
        ));
    }

    /// Minimale Zoomstufe
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Maximale Zoomstufe
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    fn set_center(&mut self, center: GeoPoint) {
        self.center = match self.bounds {
            Some(bounds) => bounds.clamp(center),
            None => center,
        };
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(GeoPoint::default(), 2.0, 0.0, 20.0, None)
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Stop {
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    #[prost(double, tag="2")]
    pub latitude: f64,
    #[prost(double, tag="3")]
    pub longitude: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoadDistance {
    /// Positional index of the departure stop.
    #[prost(uint32, tag="1")]
    pub from_stop: u32,
    /// Positional index of the arrival stop.
    #[prost(uint32, tag="2")]
    pub to_stop: u32,
    #[prost(uint32, tag="3")]
    pub meters: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Bus {
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    #[prost(bool, tag="2")]
    pub is_roundtrip: bool,
    /// Positional indices into the stop list.
    #[prost(uint32, repeated, tag="3")]
    pub stops: ::prost::alloc::vec::Vec<u32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Catalogue {
    #[prost(message, repeated, tag="1")]
    pub stops: ::prost::alloc::vec::Vec<Stop>,
    #[prost(message, repeated, tag="2")]
    pub road_distances: ::prost::alloc::vec::Vec<RoadDistance>,
    #[prost(message, repeated, tag="3")]
    pub buses: ::prost::alloc::vec::Vec<Bus>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rgb {
    #[prost(uint32, tag="1")]
    pub red: u32,
    #[prost(uint32, tag="2")]
    pub green: u32,
    #[prost(uint32, tag="3")]
    pub blue: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rgba {
    #[prost(uint32, tag="1")]
    pub red: u32,
    #[prost(uint32, tag="2")]
    pub green: u32,
    #[prost(uint32, tag="3")]
    pub blue: u32,
    #[prost(double, tag="4")]
    pub opacity: f64,
}
/// An unset `data` encodes the "no color" state.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Color {
    #[prost(oneof="color::Data", tags="1, 2, 3")]
    pub data: ::core::option::Option<color::Data>,
}
/// Nested message and enum types in `Color`.
pub mod color {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Data {
        #[prost(string, tag="1")]
        Name(::prost::alloc::string::String),
        #[prost(message, tag="2")]
        Rgb(super::Rgb),
        #[prost(message, tag="3")]
        Rgba(super::Rgba),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Point {
    #[prost(double, tag="1")]
    pub x: f64,
    #[prost(double, tag="2")]
    pub y: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenderSettings {
    #[prost(double, tag="1")]
    pub width: f64,
    #[prost(double, tag="2")]
    pub height: f64,
    #[prost(double, tag="3")]
    pub padding: f64,
    #[prost(double, tag="4")]
    pub line_width: f64,
    #[prost(double, tag="5")]
    pub stop_radius: f64,
    #[prost(uint32, tag="6")]
    pub bus_label_font_size: u32,
    #[prost(message, optional, tag="7")]
    pub bus_label_offset: ::core::option::Option<Point>,
    #[prost(uint32, tag="8")]
    pub stop_label_font_size: u32,
    #[prost(message, optional, tag="9")]
    pub stop_label_offset: ::core::option::Option<Point>,
    #[prost(message, optional, tag="10")]
    pub underlayer_color: ::core::option::Option<Color>,
    #[prost(double, tag="11")]
    pub underlayer_width: f64,
    #[prost(message, repeated, tag="12")]
    pub color_palette: ::prost::alloc::vec::Vec<Color>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoutingSettings {
    #[prost(double, tag="1")]
    pub bus_wait_time: f64,
    #[prost(double, tag="2")]
    pub bus_velocity: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Snapshot {
    #[prost(message, optional, tag="1")]
    pub catalogue: ::core::option::Option<Catalogue>,
    #[prost(message, optional, tag="2")]
    pub render_settings: ::core::option::Option<RenderSettings>,
    #[prost(message, optional, tag="3")]
    pub routing_settings: ::core::option::Option<RoutingSettings>,
}

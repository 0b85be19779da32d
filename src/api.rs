pub mod route;
pub mod sequence;

pub use route::{
    parse_route, route_from_response, FetchError, RouteClient, RouteRequest, RouteResponse, StationPath,
};
pub use sequence::{RequestSequence, RequestTicket};

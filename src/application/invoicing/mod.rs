pub mod price_car_wash;
pub mod price_service_order;

pub use price_car_wash::{CarWashChargesResponse, PriceCarWashCommand, PriceCarWashUseCase};
pub use price_service_order::{
  CostLineDto, PriceServiceOrderCommand, PriceServiceOrderUseCase, ServiceOrderResponse,
};

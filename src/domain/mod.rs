// Domain layer: 計算模型，以及引擎與 CLI 依賴的 ports (interfaces)。

pub mod model;
pub mod ports;

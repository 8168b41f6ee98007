pub mod sc18is602;
pub mod lmk04208;
pub mod lmk04832;
pub mod lmx2594;

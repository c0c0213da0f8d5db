pub mod final_price_card;
pub mod history_list;
pub mod number_input;
pub mod result_row;
pub mod toast;

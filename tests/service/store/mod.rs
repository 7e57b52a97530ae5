mod listing;
mod purchase_skin;

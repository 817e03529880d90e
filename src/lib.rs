pub mod configuration;

pub mod server;

pub mod time {
    pub mod rangeofdates;

    pub mod calendar {
        pub mod calendarerror;
        pub mod holiday;
        pub mod holidaycalendar;
        pub mod chinesecalendar;
        pub mod calendarloader;
    }
}

pub mod tool {
    pub mod datearg;
    pub mod outcome;
    pub mod adapter;
}
